//! Engine error types.
//!
//! Every error here is a precondition violation surfaced to the caller.
//! Nothing is retried or recovered internally.

use thiserror::Error;

use super::side::Side;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// Index is a store, an opponent pit, or off the board.
    NotOwnPit,
    /// Pit holds no marbles.
    EmptyPit,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::NotOwnPit => write!(f, "not one of the mover's pits"),
            InvalidMoveReason::EmptyPit => write!(f, "pit is empty"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid move for {side}: pit {pit} ({reason})")]
    InvalidMove {
        side: Side,
        pit: usize,
        reason: InvalidMoveReason,
    },

    #[error("{side} has no legal move")]
    NoLegalMove { side: Side },

    #[error("game is already finished")]
    GameFinished,

    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidMove {
            side: Side::A,
            pit: 9,
            reason: InvalidMoveReason::NotOwnPit,
        };
        assert_eq!(
            err.to_string(),
            "invalid move for Side A: pit 9 (not one of the mover's pits)"
        );

        let err = EngineError::NoLegalMove { side: Side::B };
        assert_eq!(err.to_string(), "Side B has no legal move");
    }
}

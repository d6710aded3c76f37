//! The move-selection contract shared by all opponents.
//!
//! Strategies are trait objects so a session can swap difficulty at
//! runtime:
//! - `RandomStrategy`: uniform over legal pits (easy)
//! - `GreedyStrategy`: capture, then extra turn, then biggest pit (medium)
//! - `MinimaxStrategy`: alpha-beta search with memoization (hard)

use crate::core::{Board, Difficulty, EngineConfig, EngineError, EngineResult, MoveList, Side};

use super::greedy::GreedyStrategy;
use super::minimax::MinimaxStrategy;
use super::random::RandomStrategy;

/// Policy choosing a pit for a side to sow.
pub trait Strategy: Send {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Choose a pit in `side`'s range holding at least one marble.
    ///
    /// # Errors
    ///
    /// `NoLegalMove` if all of `side`'s pits are empty, `GameFinished`
    /// if the opponent's pits are.
    fn select_move(&mut self, board: &Board, side: Side) -> EngineResult<usize>;

    /// Reset per-game state. Called when a new game starts.
    fn new_game(&mut self) {}
}

/// Legal moves for `side`, or the error a strategy must return when it is
/// asked to move in a position without a choice to make.
pub(crate) fn playable_moves(board: &Board, side: Side) -> EngineResult<MoveList> {
    let moves = board.legal_moves(side);
    if moves.is_empty() {
        return Err(EngineError::NoLegalMove { side });
    }
    if board.is_side_empty(side.opponent()) {
        return Err(EngineError::GameFinished);
    }
    Ok(moves)
}

impl EngineConfig {
    /// Create the strategy selected by `difficulty`.
    #[must_use]
    pub fn build_strategy(&self) -> Box<dyn Strategy> {
        match self.difficulty {
            Difficulty::Easy => match self.seed {
                Some(seed) => Box::new(RandomStrategy::new(seed)),
                None => Box::new(RandomStrategy::from_entropy()),
            },
            Difficulty::Medium => Box::new(GreedyStrategy),
            Difficulty::Hard => Box::new(MinimaxStrategy::new(self.depth)),
        }
    }
}

//! The sowing move: the board's single transition function.
//!
//! `apply_move` is shared by the game session and by every strategy's
//! look-ahead, so it is pure: it takes a board by reference and returns a
//! new one.

use serde::{Deserialize, Serialize};

use crate::core::board::SLOT_COUNT;
use crate::core::{Board, EngineError, EngineResult, InvalidMoveReason, Side};

/// What happens to the turn after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Last marble landed in the mover's store: the mover plays again.
    ContinueSameSide,
    /// Turn passes to the opponent.
    SwitchSide,
    /// One side's pits are all empty. The final sweep is still pending.
    GameOver,
}

impl TurnOutcome {
    /// Side to move after `mover` played a move with this outcome.
    ///
    /// Returns `None` once the game is over.
    #[must_use]
    pub fn next_side(self, mover: Side) -> Option<Side> {
        match self {
            TurnOutcome::ContinueSameSide => Some(mover),
            TurnOutcome::SwitchSide => Some(mover.opponent()),
            TurnOutcome::GameOver => None,
        }
    }
}

/// Full result of one sowing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// Board after the move (before any end-of-game sweep).
    pub board: Board,
    /// Turn transfer.
    pub outcome: TurnOutcome,
    /// Slot that received the last marble.
    pub landing: usize,
    /// Marbles moved into the store by a capture (`1 + opposite`).
    pub captured: Option<u32>,
}

impl MoveReport {
    /// Whether the last marble landed in the mover's store.
    #[must_use]
    pub fn landed_in_store(&self, side: Side) -> bool {
        self.landing == side.store()
    }
}

/// Pit directly across the board from a playing pit.
#[inline]
#[must_use]
pub const fn opposite_pit(pit: usize) -> usize {
    12 - pit
}

/// Apply one sowing move for `side` from `pit`.
///
/// Marbles are sown one per slot in increasing index order, skipping the
/// opponent's store on every lap. The landing slot decides the outcome:
/// the mover's store grants an extra turn; an own pit that was empty just
/// before the last marble, facing a non-empty opponent pit, captures both
/// into the mover's store. If either side's pits are empty afterwards the
/// outcome is `GameOver`.
///
/// # Errors
///
/// `InvalidMove` if `pit` is not one of `side`'s pits or is empty.
pub fn apply_move(board: &Board, side: Side, pit: usize) -> EngineResult<MoveReport> {
    if !side.owns_pit(pit) {
        return Err(EngineError::InvalidMove {
            side,
            pit,
            reason: InvalidMoveReason::NotOwnPit,
        });
    }

    let marbles = board[pit];
    if marbles == 0 {
        return Err(EngineError::InvalidMove {
            side,
            pit,
            reason: InvalidMoveReason::EmptyPit,
        });
    }

    Ok(sow(board, side, pit))
}

/// Sow from a pit already known to be one of `side`'s non-empty pits.
///
/// Search code iterates legal pits directly and calls this to skip the
/// validation in `apply_move`.
pub(crate) fn sow(board: &Board, side: Side, pit: usize) -> MoveReport {
    debug_assert!(board.is_legal_move(side, pit));

    let marbles = board[pit];
    let mut next = *board;
    let own_store = side.store();
    let skipped = side.opponent().store();
    let slots = next.slots_mut();

    slots[pit] = 0;

    // Drop all but the last marble.
    let mut slot = pit;
    let mut remaining = marbles;
    loop {
        slot = (slot + 1) % SLOT_COUNT;
        if slot == skipped {
            continue;
        }
        remaining -= 1;
        if remaining == 0 {
            break;
        }
        slots[slot] += 1;
    }

    let landing = slot;
    let mut captured = None;
    let mut outcome = TurnOutcome::SwitchSide;

    if landing == own_store {
        slots[landing] += 1;
        outcome = TurnOutcome::ContinueSameSide;
    } else if side.owns_pit(landing) && slots[landing] == 0 && slots[opposite_pit(landing)] > 0 {
        let opposite = opposite_pit(landing);
        let gained = 1 + slots[opposite];
        slots[opposite] = 0;
        slots[landing] = 0;
        slots[own_store] += gained;
        captured = Some(gained);
    } else {
        slots[landing] += 1;
    }

    if next.is_game_over() {
        outcome = TurnOutcome::GameOver;
    }

    MoveReport {
        board: next,
        outcome,
        landing,
        captured,
    }
}

//! Static board evaluation for search leaves.

use crate::core::{Board, Side};

/// Score a board from side B's point of view.
///
/// Each side's remaining pits count as if already swept into its store, so
/// the score is the final margin if the game ended here. Positive favors B.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    board.side_total(Side::B) as i32 - board.side_total(Side::A) as i32
}

/// Same score seen from `side`'s point of view.
#[must_use]
pub fn evaluate_for(board: &Board, side: Side) -> i32 {
    match side {
        Side::B => evaluate(board),
        Side::A => -evaluate(board),
    }
}

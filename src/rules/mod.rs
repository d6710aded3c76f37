//! Game rules.
//!
//! - `sowing`: the pure move function shared by play and search
//! - `game`: turn sequencing, the final sweep, and the winner

pub mod sowing;
pub mod game;

pub use sowing::{apply_move, opposite_pit, MoveReport, TurnOutcome};
pub use game::{Game, GameResult, GameSnapshot, MoveRecord};

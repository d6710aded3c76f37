//! Core types: board, sides, errors, RNG, configuration.
//!
//! Everything here is plain data. Rules live in `rules`, opponents in `ai`.

pub mod board;
pub mod side;
pub mod error;
pub mod rng;
pub mod config;

pub use board::{Board, MoveList};
pub use side::{Side, SideMap};
pub use error::{EngineError, EngineResult, InvalidMoveReason};
pub use rng::GameRng;
pub use config::{Difficulty, EngineConfig, SearchDepth};

//! # mancala-engine
//!
//! Rules and computer opponents for a Kalah-style Mancala variant.
//!
//! ## Board
//!
//! Fourteen slots, sown in increasing index order:
//!
//! ```text
//!        12  11  10   9   8   7
//!   13                            6
//!         0   1   2   3   4   5
//! ```
//!
//! Slots 0-5 are side A's pits and 6 its store; 7-12 are side B's pits and
//! 13 its store. The pit across from `i` is `12 - i`.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `apply_move` never mutates its input. Boards are
//!    `Copy`, so search simply takes a copy per child.
//!
//! 2. **No global state**: difficulty, search depth and seeds live in an
//!    `EngineConfig` owned by the caller. The minimax cache is a value that
//!    may be shared explicitly between strategies.
//!
//! 3. **Deterministic opponents**: every strategy is deterministic for a
//!    fixed seed, so whole games can be replayed.
//!
//! ## Modules
//!
//! - `core`: Board, sides, errors, RNG, configuration
//! - `rules`: The sowing move and the game session
//! - `ai`: Evaluation and the random, greedy and minimax strategies

pub mod core;
pub mod rules;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    Board, MoveList, Side, SideMap,
    EngineError, EngineResult, InvalidMoveReason,
    GameRng,
    Difficulty, EngineConfig, SearchDepth,
};

pub use crate::rules::{
    apply_move, opposite_pit, MoveReport, TurnOutcome,
    Game, GameResult, GameSnapshot, MoveRecord,
};

pub use crate::ai::{
    evaluate, evaluate_for,
    minimax, select_easy_move, select_hard_move, select_medium_move,
    Strategy, RandomStrategy, GreedyStrategy, MinimaxStrategy,
    SearchCache, SearchKey, SearchResult, SharedSearchCache, SearchStats,
};

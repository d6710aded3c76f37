//! Engine configuration.
//!
//! A session picks its opponent and opening position through `EngineConfig`
//! rather than through process-wide state, so two sessions never influence
//! each other.

use serde::{Deserialize, Serialize};

use super::board::{Board, STANDARD_MARBLES_PER_PIT};

/// Opponent strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniform random legal move.
    Easy,
    /// Greedy one-ply heuristic.
    #[default]
    Medium,
    /// Minimax with alpha-beta pruning and memoization.
    Hard,
}

/// Minimax depth budget in plies.
///
/// The first decision of a game may search deeper than later ones, trading
/// a one-time latency cost for a stronger opening.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchDepth {
    /// Depth for the first decision of a game.
    pub opening: i32,
    /// Depth for every later decision.
    pub standard: i32,
}

impl SearchDepth {
    /// Use the same depth for every decision.
    #[must_use]
    pub const fn fixed(depth: i32) -> Self {
        Self {
            opening: depth,
            standard: depth,
        }
    }
}

impl Default for SearchDepth {
    fn default() -> Self {
        Self {
            opening: 8,
            standard: 6,
        }
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Which strategy plays the engine's side.
    pub difficulty: Difficulty,

    /// Depth budget for `Difficulty::Hard`.
    pub depth: SearchDepth,

    /// Seed for `Difficulty::Easy`. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Marbles in every pit of the opening position.
    pub marbles_per_pit: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            depth: SearchDepth::default(),
            seed: None,
            marbles_per_pit: STANDARD_MARBLES_PER_PIT,
        }
    }
}

impl EngineConfig {
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_depth(mut self, depth: SearchDepth) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_marbles_per_pit(mut self, marbles: u32) -> Self {
        self.marbles_per_pit = marbles;
        self
    }

    /// Opening position for this configuration.
    #[must_use]
    pub fn initial_board(&self) -> Board {
        Board::new(self.marbles_per_pit)
    }
}

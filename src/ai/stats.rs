//! Minimax search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one top-level search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, including leaves and cache hits.
    pub nodes: u64,

    /// Leaves scored by the evaluator.
    pub terminal_nodes: u64,

    /// Nodes answered from the cache.
    pub cache_hits: u64,

    /// Sibling scans cut short by alpha-beta.
    pub cutoffs: u64,

    /// Depth budget of the search.
    pub depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

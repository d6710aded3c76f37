//! Computer opponents.
//!
//! Three strategies of increasing strength share the `Strategy` trait:
//! random (easy), greedy (medium), and minimax with alpha-beta pruning
//! (hard). All of them look ahead with the sowing rules in `rules` and
//! never mutate the board they are given.

pub mod evaluate;
pub mod strategy;
pub mod random;
pub mod greedy;
pub mod minimax;
pub mod cache;
pub mod stats;

pub use evaluate::{evaluate, evaluate_for};
pub use strategy::Strategy;
pub use random::{select_easy_move, RandomStrategy};
pub use greedy::{select_medium_move, GreedyStrategy};
pub use minimax::{minimax, select_hard_move, MinimaxStrategy, SearchResult};
pub use cache::{SearchCache, SearchKey, SharedSearchCache};
pub use stats::SearchStats;

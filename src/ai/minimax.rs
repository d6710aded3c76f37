//! Hard opponent: depth-limited minimax with alpha-beta pruning.
//!
//! ## Search rules
//!
//! - Side B maximizes `evaluate`, side A minimizes it.
//! - A move ending in the mover's own store is followed by the same side at
//!   the **same** depth: extra turns are free plies.
//! - Any other move passes to the opponent at `depth - 1`.
//! - Pits are scanned in ascending order and the best move is only replaced
//!   on a strictly better score, so the lowest optimal pit wins ties.
//! - Every child is searched with the node's incoming `alpha`/`beta`. The
//!   best score so far only decides whether the remaining siblings are
//!   skipped.
//! - Results are memoized by `(board, side, depth)`. Only minimizing-side
//!   nodes are stored.

use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Board, EngineError, EngineResult, SearchDepth, Side};
use crate::rules::sowing::sow;
use crate::rules::TurnOutcome;

use super::cache::{SearchCache, SearchKey, SharedSearchCache};
use super::evaluate::evaluate;
use super::stats::SearchStats;
use super::strategy::{playable_moves, Strategy};

/// Score and best move of a search node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Evaluation from side B's point of view.
    pub score: i32,
    /// Best pit, or `None` at a leaf.
    pub best_move: Option<usize>,
}

impl SearchResult {
    fn leaf(board: &Board) -> Self {
        Self {
            score: evaluate(board),
            best_move: None,
        }
    }
}

/// Search `board` with `side` to move.
///
/// Returns the evaluator score and no move when either side's pits are
/// empty or `depth <= 0`.
///
/// `alpha` and `beta` are passed unchanged to every child. Top-level
/// searches use the full `i32::MIN..=i32::MAX` window, under which cached
/// results are exact values.
pub fn minimax(
    board: &Board,
    side: Side,
    depth: i32,
    alpha: i32,
    beta: i32,
    cache: &mut SearchCache,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;

    if board.is_game_over() || depth <= 0 {
        stats.terminal_nodes += 1;
        return SearchResult::leaf(board);
    }

    let key = SearchKey::new(*board, side, depth);
    if let Some(cached) = cache.get(&key) {
        stats.cache_hits += 1;
        return cached;
    }

    if side.is_maximizing() {
        let mut best = SearchResult {
            score: i32::MIN,
            best_move: None,
        };

        for pit in side.pits() {
            if board[pit] == 0 {
                continue;
            }

            let score = child_score(board, side, pit, depth, alpha, beta, cache, stats);
            if score > best.score {
                best = SearchResult {
                    score,
                    best_move: Some(pit),
                };
            }

            if alpha.max(best.score) > beta {
                stats.cutoffs += 1;
                break;
            }
        }

        best
    } else {
        let mut best = SearchResult {
            score: i32::MAX,
            best_move: None,
        };

        for pit in side.pits() {
            if board[pit] == 0 {
                continue;
            }

            let score = child_score(board, side, pit, depth, alpha, beta, cache, stats);
            if score < best.score {
                best = SearchResult {
                    score,
                    best_move: Some(pit),
                };
            }

            if beta.min(best.score) < alpha {
                stats.cutoffs += 1;
                break;
            }
        }

        // TODO: measure whether also caching maximizing nodes changes play
        // strength or memory use before storing them.
        cache.insert(key, best);
        best
    }
}

#[allow(clippy::too_many_arguments)]
fn child_score(
    board: &Board,
    side: Side,
    pit: usize,
    depth: i32,
    alpha: i32,
    beta: i32,
    cache: &mut SearchCache,
    stats: &mut SearchStats,
) -> i32 {
    let report = sow(board, side, pit);

    match report.outcome {
        TurnOutcome::ContinueSameSide => {
            minimax(&report.board, side, depth, alpha, beta, cache, stats).score
        }
        TurnOutcome::SwitchSide => {
            minimax(&report.board, side.opponent(), depth - 1, alpha, beta, cache, stats).score
        }
        TurnOutcome::GameOver => {
            stats.nodes += 1;
            stats.terminal_nodes += 1;
            evaluate(&report.board)
        }
    }
}

/// Pick the best pit for `side` searching `depth` plies.
///
/// Depths below 1 are raised to 1 so a move is always produced.
///
/// # Errors
///
/// See [`Strategy::select_move`].
pub fn select_hard_move(
    board: &Board,
    side: Side,
    depth: i32,
    cache: &mut SearchCache,
) -> EngineResult<usize> {
    let mut stats = SearchStats::new();
    search_root(board, side, depth, cache, &mut stats)
}

fn search_root(
    board: &Board,
    side: Side,
    depth: i32,
    cache: &mut SearchCache,
    stats: &mut SearchStats,
) -> EngineResult<usize> {
    playable_moves(board, side)?;

    let depth = depth.max(1);
    stats.depth = depth as u32;

    let result = minimax(board, side, depth, i32::MIN, i32::MAX, cache, stats);
    result.best_move.ok_or(EngineError::NoLegalMove { side })
}

/// Minimax strategy with a per-game depth schedule and a shareable cache.
#[derive(Debug)]
pub struct MinimaxStrategy {
    depth: SearchDepth,
    cache: SharedSearchCache,
    opening_pending: bool,
    stats: SearchStats,
}

impl MinimaxStrategy {
    /// Strategy with its own empty cache.
    pub fn new(depth: SearchDepth) -> Self {
        Self {
            depth,
            cache: SharedSearchCache::new(),
            opening_pending: true,
            stats: SearchStats::default(),
        }
    }

    /// Use a cache shared with other strategies.
    pub fn with_cache(mut self, cache: SharedSearchCache) -> Self {
        self.cache = cache;
        self
    }

    /// The cache handle.
    #[must_use]
    pub fn cache(&self) -> &SharedSearchCache {
        &self.cache
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Depth the next decision will use.
    #[must_use]
    pub fn next_depth(&self) -> i32 {
        if self.opening_pending {
            self.depth.opening
        } else {
            self.depth.standard
        }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(SearchDepth::default())
    }
}

impl Strategy for MinimaxStrategy {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn select_move(&mut self, board: &Board, side: Side) -> EngineResult<usize> {
        let depth = self.next_depth();
        let start = Instant::now();
        self.stats.reset();

        let pit = {
            let mut cache = self.cache.lock();
            search_root(board, side, depth, &mut cache, &mut self.stats)?
        };

        self.opening_pending = false;
        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            "{} chose pit {} for {} (depth {}, {} nodes, {} cache hits, {} cutoffs, {}us)",
            self.name(),
            pit,
            side,
            self.stats.depth,
            self.stats.nodes,
            self.stats.cache_hits,
            self.stats.cutoffs,
            self.stats.time_us
        );
        Ok(pit)
    }

    fn new_game(&mut self) {
        self.opening_pending = true;
    }
}

//! Medium opponent: a one-ply greedy heuristic.
//!
//! Tiers are tried in order and the first tier with a candidate wins:
//! 1. the capture taking the most marbles,
//! 2. the extra-turn move sowing the most marbles,
//! 3. the fullest pit, with a bonus if its sow reaches the store.
//!
//! Pits are scanned in ascending order and only a strictly better score
//! replaces the current pick, so ties go to the lowest pit.

use log::debug;

use crate::core::{Board, EngineResult, Side};
use crate::rules::apply_move;

use super::strategy::{playable_moves, Strategy};

/// Fallback bonus for a pit whose sow reaches the mover's store.
pub const STORE_REACH_BONUS: u32 = 10;

/// Pick a pit for `side` using the greedy tiers.
///
/// # Errors
///
/// See [`Strategy::select_move`].
pub fn select_medium_move(board: &Board, side: Side) -> EngineResult<usize> {
    let moves = playable_moves(board, side)?;

    let mut captures: Option<(usize, u32)> = None;
    let mut extra_turns: Option<(usize, u32)> = None;

    for &pit in &moves {
        let report = apply_move(board, side, pit)?;

        if let Some(gained) = report.captured {
            if captures.map_or(true, |(_, best)| gained > best) {
                captures = Some((pit, gained));
            }
        }

        if report.landed_in_store(side) {
            let sown = board[pit];
            if extra_turns.map_or(true, |(_, best)| sown > best) {
                extra_turns = Some((pit, sown));
            }
        }
    }

    if let Some((pit, _)) = captures {
        return Ok(pit);
    }
    if let Some((pit, _)) = extra_turns {
        return Ok(pit);
    }

    let mut fallback = (moves[0], 0);
    for &pit in &moves {
        let score = fallback_score(board, side, pit);
        if score > fallback.1 {
            fallback = (pit, score);
        }
    }
    Ok(fallback.0)
}

fn fallback_score(board: &Board, side: Side, pit: usize) -> u32 {
    let marbles = board[pit];
    if pit + marbles as usize >= side.store() {
        marbles + STORE_REACH_BONUS
    } else {
        marbles
    }
}

/// Greedy strategy. Stateless.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn select_move(&mut self, board: &Board, side: Side) -> EngineResult<usize> {
        let pit = select_medium_move(board, side)?;
        debug!("{} chose pit {} for {}", self.name(), pit, side);
        Ok(pit)
    }
}

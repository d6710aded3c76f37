//! Easy opponent: uniform random choice among legal pits.

use log::debug;

use crate::core::{Board, EngineError, EngineResult, GameRng, Side};

use super::strategy::{playable_moves, Strategy};

/// Pick a legal pit for `side` uniformly at random.
///
/// # Errors
///
/// See [`Strategy::select_move`].
pub fn select_easy_move(board: &Board, side: Side, rng: &mut GameRng) -> EngineResult<usize> {
    let moves = playable_moves(board, side)?;
    rng.choose(&moves)
        .copied()
        .ok_or(EngineError::NoLegalMove { side })
}

/// Random strategy with its own seeded RNG.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Deterministic strategy for a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Strategy seeded from entropy. The seed is logged so the game can be
    /// replayed with `new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        let rng = GameRng::from_entropy();
        debug!("random strategy seeded with {}", rng.seed());
        Self { rng }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select_move(&mut self, board: &Board, side: Side) -> EngineResult<usize> {
        let pit = select_easy_move(board, side, &mut self.rng)?;
        debug!("{} chose pit {} for {}", self.name(), pit, side);
        Ok(pit)
    }
}

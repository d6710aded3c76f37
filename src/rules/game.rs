//! Game session: a board, the side to move, and the end-of-game rules.
//!
//! `Game` owns the turn sequencing that `apply_move` leaves to its caller:
//! it advances the side to move, performs the final sweep once a side runs
//! out of marbles, and reports the winner.

use im::Vector;
use log::{info, trace};
use serde::{Deserialize, Serialize};

use crate::ai::Strategy;
use crate::core::board::SLOT_COUNT;
use crate::core::{Board, EngineError, EngineResult, Side, SideMap};

use super::sowing::{apply_move, TurnOutcome};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Larger store wins.
    Winner(Side),
    /// Equal stores.
    Draw,
}

impl GameResult {
    /// Decide the result of a swept board.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let a = board.side_total(Side::A);
        let b = board.side_total(Side::B);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => GameResult::Winner(Side::A),
            std::cmp::Ordering::Less => GameResult::Winner(Side::B),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// One played move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub side: Side,
    pub pit: usize,
    pub outcome: TurnOutcome,
    pub captured: Option<u32>,
}

/// A running game.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Side,
    finished: bool,
    /// Played moves, oldest first. Persistent so cloning a game is O(1).
    history: Vector<MoveRecord>,
}

impl Game {
    /// Start a game from any position.
    ///
    /// A position where a side is already empty is swept immediately.
    #[must_use]
    pub fn new(board: Board, first: Side) -> Self {
        let mut game = Self {
            board,
            to_move: first,
            finished: false,
            history: Vector::new(),
        };
        if board.is_game_over() {
            game.finish();
        }
        game
    }

    /// Standard opening, side A first.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Board::standard(), Side::A)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move. Meaningless once finished.
    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Current store counts.
    #[must_use]
    pub fn scores(&self) -> SideMap<u32> {
        self.board.stores()
    }

    /// Final result, or `None` while the game is running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.finished.then(|| GameResult::from_board(&self.board))
    }

    /// Play `pit` for the side to move.
    ///
    /// # Errors
    ///
    /// `GameFinished` after the game ended, `InvalidMove` for an illegal pit.
    pub fn play(&mut self, pit: usize) -> EngineResult<TurnOutcome> {
        if self.finished {
            return Err(EngineError::GameFinished);
        }

        let side = self.to_move;
        let report = apply_move(&self.board, side, pit)?;
        trace!("{} sowed pit {} -> {:?}", side, pit, report.outcome);

        self.board = report.board;
        self.history.push_back(MoveRecord {
            side,
            pit,
            outcome: report.outcome,
            captured: report.captured,
        });

        match report.outcome.next_side(side) {
            Some(next) => self.to_move = next,
            None => self.finish(),
        }

        Ok(report.outcome)
    }

    /// Ask `strategy` for a move for the side to move and play it.
    ///
    /// # Errors
    ///
    /// Whatever the strategy or `play` returns.
    pub fn play_with(&mut self, strategy: &mut dyn Strategy) -> EngineResult<(usize, TurnOutcome)> {
        if self.finished {
            return Err(EngineError::GameFinished);
        }
        let pit = strategy.select_move(&self.board, self.to_move)?;
        let outcome = self.play(pit)?;
        Ok((pit, outcome))
    }

    fn finish(&mut self) {
        self.board = self.board.swept();
        self.finished = true;
        let scores = self.scores();
        info!(
            "game over after {} moves: A {} - B {} ({:?})",
            self.history.len(),
            scores[Side::A],
            scores[Side::B],
            GameResult::from_board(&self.board)
        );
    }

    /// Capture the resumable part of the game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            slots: self.board.slots().to_vec(),
            to_move: self.to_move,
            finished: self.finished,
        }
    }

    /// Resume a game from a snapshot. History starts empty.
    ///
    /// # Errors
    ///
    /// `Snapshot` if the snapshot does not describe a 14-slot board.
    pub fn restore(snapshot: &GameSnapshot) -> EngineResult<Self> {
        let slots: [u32; SLOT_COUNT] = snapshot.slots.as_slice().try_into().map_err(|_| {
            EngineError::Snapshot(format!(
                "expected {} slots, found {}",
                SLOT_COUNT,
                snapshot.slots.len()
            ))
        })?;
        let board = Board::from_slots(slots);

        if snapshot.finished {
            return Ok(Self {
                board,
                to_move: snapshot.to_move,
                finished: true,
                history: Vector::new(),
            });
        }
        Ok(Self::new(board, snapshot.to_move))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}

/// Serializable game position.
///
/// Slots are stored as a list so a malformed snapshot is reported as an
/// error instead of failing inside the decoder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub slots: Vec<u32>,
    pub to_move: Side,
    pub finished: bool,
}

impl GameSnapshot {
    /// Encode with bincode.
    ///
    /// # Errors
    ///
    /// `Snapshot` if encoding fails.
    pub fn to_bytes(&self) -> EngineResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    ///
    /// # Errors
    ///
    /// `Snapshot` if the bytes are not a snapshot.
    pub fn from_bytes(bytes: &[u8]) -> EngineResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::GreedyStrategy;

    #[test]
    fn test_game_result() {
        let a_wins = Board::from_slots([0, 0, 0, 0, 0, 0, 30, 0, 0, 0, 0, 0, 0, 18]);
        assert_eq!(GameResult::from_board(&a_wins), GameResult::Winner(Side::A));
        assert!(GameResult::from_board(&a_wins).is_winner(Side::A));
        assert!(!GameResult::from_board(&a_wins).is_winner(Side::B));

        let draw = Board::from_slots([0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 24]);
        assert_eq!(GameResult::from_board(&draw), GameResult::Draw);
        assert!(!GameResult::Draw.is_winner(Side::A));
    }

    #[test]
    fn test_turn_passes() {
        let mut game = Game::standard();
        assert_eq!(game.play(0).unwrap(), TurnOutcome::SwitchSide);
        assert_eq!(game.to_move(), Side::B);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_extra_turn_keeps_side() {
        let mut game = Game::standard();
        assert_eq!(game.play(2).unwrap(), TurnOutcome::ContinueSameSide);
        assert_eq!(game.to_move(), Side::A);
        assert_eq!(game.scores()[Side::A], 1);
    }

    #[test]
    fn test_invalid_move_leaves_game_untouched() {
        let mut game = Game::standard();
        let before = *game.board();

        assert!(game.play(9).is_err());
        assert_eq!(*game.board(), before);
        assert_eq!(game.to_move(), Side::A);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_game_over_sweeps_remaining_marbles() {
        // A's last marble goes to its store; B keeps 7 marbles.
        let start = Board::from_slots([0, 0, 0, 0, 0, 1, 20, 3, 0, 4, 0, 0, 0, 20]);
        let mut game = Game::new(start, Side::A);

        assert_eq!(game.play(5).unwrap(), TurnOutcome::GameOver);
        assert!(game.is_finished());
        assert_eq!(game.scores()[Side::A], 21);
        assert_eq!(game.scores()[Side::B], 27);
        assert_eq!(game.result(), Some(GameResult::Winner(Side::B)));
        assert_eq!(game.board().total_marbles(), start.total_marbles());

        assert_eq!(game.play(7).unwrap_err(), EngineError::GameFinished);
    }

    #[test]
    fn test_finished_position_is_swept_on_creation() {
        let start = Board::from_slots([0, 0, 0, 0, 0, 0, 10, 2, 0, 0, 0, 0, 0, 8]);
        let game = Game::new(start, Side::A);
        assert!(game.is_finished());
        assert_eq!(game.result(), Some(GameResult::Draw));
    }

    #[test]
    fn test_play_with_strategy() {
        let mut game = Game::standard();
        let mut greedy = GreedyStrategy;

        let (pit, outcome) = game.play_with(&mut greedy).unwrap();
        // Pit 2 is the only opening move ending in the store.
        assert_eq!(pit, 2);
        assert_eq!(outcome, TurnOutcome::ContinueSameSide);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut game = Game::standard();
        game.play(0).unwrap();

        let bytes = game.snapshot().to_bytes().unwrap();
        let restored = Game::restore(&GameSnapshot::from_bytes(&bytes).unwrap()).unwrap();

        assert_eq!(restored.board(), game.board());
        assert_eq!(restored.to_move(), Side::B);
        assert!(!restored.is_finished());
        assert!(restored.history().is_empty());
    }

    #[test]
    fn test_snapshot_rejects_wrong_slot_count() {
        let snapshot = GameSnapshot {
            slots: vec![4; 12],
            to_move: Side::A,
            finished: false,
        };
        assert!(matches!(Game::restore(&snapshot), Err(EngineError::Snapshot(_))));
        assert!(matches!(GameSnapshot::from_bytes(&[1, 2]), Err(EngineError::Snapshot(_))));
    }
}

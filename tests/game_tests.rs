//! Full-game integration tests: sessions driven by the built-in strategies.

use mancala_engine::{
    Difficulty, EngineConfig, EngineError, Game, GameResult, GameSnapshot, GreedyStrategy,
    MinimaxStrategy, RandomStrategy, SearchDepth, SharedSearchCache, Side, Strategy, TurnOutcome,
};

const MAX_MOVES: usize = 2_000;

/// Play until the game ends, `a` moving for side A and `b` for side B.
fn play_out<'a>(game: &mut Game, a: &'a mut dyn Strategy, b: &'a mut dyn Strategy) {
    for _ in 0..MAX_MOVES {
        if game.is_finished() {
            return;
        }
        let strategy = match game.to_move() {
            Side::A => &mut *a,
            Side::B => &mut *b,
        };
        game.play_with(strategy).unwrap();
    }
    panic!("game did not finish within {} moves", MAX_MOVES);
}

fn assert_final_position(game: &Game) {
    let board = game.board();
    assert!(game.is_finished());
    assert!(board.is_side_empty(Side::A));
    assert!(board.is_side_empty(Side::B));
    assert_eq!(board.total_marbles(), 48);

    let scores = game.scores();
    let expected = match scores[Side::A].cmp(&scores[Side::B]) {
        std::cmp::Ordering::Greater => GameResult::Winner(Side::A),
        std::cmp::Ordering::Less => GameResult::Winner(Side::B),
        std::cmp::Ordering::Equal => GameResult::Draw,
    };
    assert_eq!(game.result(), Some(expected));
}

// =============================================================================
// Self-Play
// =============================================================================

#[test]
fn test_random_vs_random() {
    for seed in 0..20 {
        let mut game = Game::standard();
        let mut a = RandomStrategy::new(seed);
        let mut b = RandomStrategy::new(seed + 1_000);
        play_out(&mut game, &mut a, &mut b);
        assert_final_position(&game);
    }
}

#[test]
fn test_greedy_vs_random() {
    for seed in 0..10 {
        let mut game = Game::standard();
        let mut a = RandomStrategy::new(seed);
        let mut b = GreedyStrategy;
        play_out(&mut game, &mut a, &mut b);
        assert_final_position(&game);
    }
}

#[test]
fn test_minimax_vs_greedy() {
    let mut game = Game::standard();
    let mut a = GreedyStrategy;
    let mut b = MinimaxStrategy::new(SearchDepth { opening: 4, standard: 3 });
    play_out(&mut game, &mut a, &mut b);
    assert_final_position(&game);
    assert!(b.stats().nodes > 0);
}

#[test]
fn test_seeded_games_replay_identically() {
    let run = |seed| {
        let mut game = Game::standard();
        let mut a = RandomStrategy::new(seed);
        let mut b = RandomStrategy::new(seed ^ 0xFF);
        play_out(&mut game, &mut a, &mut b);
        game.history().iter().map(|record| record.pit).collect::<Vec<_>>()
    };
    assert_eq!(run(7), run(7));
}

#[test]
fn test_history_matches_turn_order() {
    let mut game = Game::standard();
    let mut a = RandomStrategy::new(3);
    let mut b = RandomStrategy::new(4);
    play_out(&mut game, &mut a, &mut b);

    let history = game.history();
    assert!(!history.is_empty());
    assert_eq!(history.front().map(|record| record.side), Some(Side::A));

    for (prev, next) in history.iter().zip(history.iter().skip(1)) {
        let expected = prev.outcome.next_side(prev.side);
        assert_eq!(Some(next.side), expected);
    }
    assert_eq!(history.back().map(|record| record.outcome), Some(TurnOutcome::GameOver));
}

#[test]
fn test_config_built_strategies_finish_games() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let config = EngineConfig::default()
            .with_difficulty(difficulty)
            .with_depth(SearchDepth::fixed(3))
            .with_seed(11);
        let mut game = Game::new(config.initial_board(), Side::A);
        let mut opponent = config.build_strategy();
        let mut human = RandomStrategy::new(5);

        play_out(&mut game, &mut human, opponent.as_mut());
        assert_final_position(&game);
    }
}

#[test]
fn test_shared_cache_across_games() {
    let cache = SharedSearchCache::new();
    for seed in 0..3 {
        let mut game = Game::standard();
        let mut a = RandomStrategy::new(seed);
        let mut b = MinimaxStrategy::new(SearchDepth::fixed(3)).with_cache(cache.clone());
        play_out(&mut game, &mut a, &mut b);
        assert_final_position(&game);
    }
    assert!(!cache.is_empty());
}

// =============================================================================
// Session API
// =============================================================================

#[test]
fn test_no_moves_after_game_over() {
    let mut game = Game::standard();
    let mut a = GreedyStrategy;
    let mut b = GreedyStrategy;
    play_out(&mut game, &mut a, &mut b);

    assert_eq!(game.play(0).unwrap_err(), EngineError::GameFinished);
    assert_eq!(game.play_with(&mut a).unwrap_err(), EngineError::GameFinished);
}

#[test]
fn test_snapshot_resume_mid_game() {
    let mut game = Game::standard();
    let mut a = RandomStrategy::new(21);
    let mut b = RandomStrategy::new(22);
    for _ in 0..6 {
        if game.is_finished() {
            break;
        }
        let strategy: &mut dyn Strategy = match game.to_move() {
            Side::A => &mut a,
            Side::B => &mut b,
        };
        game.play_with(strategy).unwrap();
    }

    let bytes = game.snapshot().to_bytes().unwrap();
    let mut resumed = Game::restore(&GameSnapshot::from_bytes(&bytes).unwrap()).unwrap();
    assert_eq!(resumed.board(), game.board());
    assert_eq!(resumed.to_move(), game.to_move());

    let mut a = GreedyStrategy;
    let mut b = GreedyStrategy;
    play_out(&mut resumed, &mut a, &mut b);
    assert_final_position(&resumed);
}

#[test]
fn test_snapshot_of_finished_game() {
    let mut game = Game::standard();
    let mut a = GreedyStrategy;
    let mut b = RandomStrategy::new(9);
    play_out(&mut game, &mut a, &mut b);

    let restored = Game::restore(&game.snapshot()).unwrap();
    assert!(restored.is_finished());
    assert_eq!(restored.result(), game.result());
}

#[test]
fn test_cloned_game_diverges_independently() {
    let mut game = Game::standard();
    game.play(0).unwrap();
    let branch = game.clone();

    game.play(7).unwrap();
    assert_eq!(branch.history().len(), 1);
    assert_eq!(game.history().len(), 2);
    assert_eq!(branch.to_move(), Side::B);
}

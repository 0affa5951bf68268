//! End-to-end sessions driven through the controller, the way an input
//! front end would.

use std::collections::VecDeque;

use connect_four_minimax::ai::{Agent, MinimaxAgent, RandomAgent};
use connect_four_minimax::controller::{
    ChannelObserver, GameController, GameUpdate, Phase, Placement,
};
use connect_four_minimax::error::MoveError;
use connect_four_minimax::game::{Board, Cell, GameOutcome, Side, COLS, ROWS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Automated side that replays a fixed column list.
struct Scripted(VecDeque<usize>);

impl Agent for Scripted {
    fn select_move(&mut self, _board: &Board) -> Option<usize> {
        self.0.pop_front()
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

fn scripted(columns: &[usize]) -> GameController {
    GameController::new(Box::new(Scripted(columns.iter().copied().collect())))
}

fn assert_gravity(board: &Board) {
    for col in 0..COLS {
        let height = board.column_height(col);
        for row in 0..ROWS {
            assert_eq!(board.get(row, col) != Cell::Empty, row >= ROWS - height);
        }
    }
}

#[test]
fn human_win_ends_the_game() {
    let mut game = scripted(&[6, 6, 6]);
    for col in 0..3 {
        let report = game.submit_move(col).unwrap();
        assert_eq!(report.outcome, GameOutcome::InProgress);
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
    }

    let report = game.submit_move(3).unwrap();
    assert_eq!(report.outcome, GameOutcome::HumanWin);
    assert_eq!(report.automated, None);
    assert_eq!(game.phase(), Phase::GameOver(GameOutcome::HumanWin));
}

#[test]
fn automated_win_ends_the_game() {
    let mut game = scripted(&[6, 6, 6, 6]);
    for col in [1, 1, 2] {
        game.submit_move(col).unwrap();
    }

    let report = game.submit_move(2).unwrap();
    assert_eq!(
        report.automated,
        Some(Placement { side: Side::Automated, column: 6, row: 2 })
    );
    assert_eq!(report.outcome, GameOutcome::AutomatedWin);
    assert_eq!(game.phase(), Phase::GameOver(GameOutcome::AutomatedWin));
}

#[test]
fn moves_after_game_over_are_rejected() {
    let mut game = scripted(&[6, 6, 6]);
    for col in 0..4 {
        game.submit_move(col).unwrap();
    }
    let board = *game.board();
    let history = game.history().len();

    assert_eq!(game.submit_move(4), Err(MoveError::GameOver));
    assert_eq!(game.board(), &board);
    assert_eq!(game.history().len(), history);
    assert_eq!(game.phase(), Phase::GameOver(GameOutcome::HumanWin));
}

#[test]
fn full_column_is_rejected_without_side_effects() {
    let mut game = scripted(&[0, 0, 0]);
    for _ in 0..3 {
        game.submit_move(0).unwrap();
    }
    assert!(!game.board().is_legal(0));

    let board = *game.board();
    let phase = game.phase();
    let outcome = game.outcome();
    let history = game.history().to_vec();

    assert_eq!(game.submit_move(0), Err(MoveError::ColumnFull(0)));
    assert_eq!(game.board(), &board);
    assert_eq!(game.phase(), phase);
    assert_eq!(game.outcome(), outcome);
    assert_eq!(game.history(), history.as_slice());
}

#[test]
fn draw_when_the_board_fills() {
    let target = Board::from_rows([
        "HHAAHHA", "AAHHAAH", "HHAAHHA", "AAHHAAH", "HHAAHHA", "AAHHAAH",
    ])
    .unwrap();
    // Every intermediate position is a bottom-aligned subset of the target,
    // which holds no four, so nobody wins along the way.
    let human = [2, 0, 0, 0, 1, 1, 1, 2, 2, 3, 3, 3, 6, 4, 4, 4, 5, 5, 5, 6, 6];
    let automated = [0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6];

    let mut game = scripted(&automated);
    let mut last = None;
    for col in human {
        last = Some(game.submit_move(col).unwrap());
    }

    assert_eq!(game.board(), &target);
    assert_eq!(last.unwrap().outcome, GameOutcome::Draw);
    assert_eq!(game.phase(), Phase::GameOver(GameOutcome::Draw));
    assert!(game.board().legal_moves().is_empty());
}

#[test]
fn observers_see_every_mutation() {
    let mut game = scripted(&[6, 6, 6]);
    let (observer, updates) = ChannelObserver::channel();
    game.subscribe(Box::new(observer));

    game.submit_move(0).unwrap();
    let received: Vec<GameUpdate> = updates.try_iter().collect();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].phase, Phase::AwaitingAutomatedMove);
    assert_eq!(received[0].last_move.unwrap().side, Side::Human);
    assert_eq!(received[1].phase, Phase::AwaitingHumanMove);
    assert_eq!(received[1].board, *game.board());

    // Rejected moves produce nothing.
    assert!(game.submit_move(9).is_err());
    assert_eq!(updates.try_iter().count(), 0);

    game.reset();
    let reset: Vec<GameUpdate> = updates.try_iter().collect();
    assert_eq!(reset.len(), 1);
    assert_eq!(reset[0].board, Board::new());
    assert_eq!(reset[0].last_move, None);
}

#[test]
fn minimax_blocks_a_vertical_stack() {
    let mut game = GameController::new(Box::new(MinimaxAgent::default()));
    while game.phase() == Phase::AwaitingHumanMove && game.board().is_legal(0) {
        game.submit_move(0).unwrap();
    }
    assert_ne!(game.outcome(), GameOutcome::HumanWin);
}

#[test]
fn minimax_beats_random_play() {
    let games = 10;
    let mut wins = 0;
    for seed in 0..games {
        let mut game = GameController::new(Box::new(MinimaxAgent::with_depth(4)));
        let mut rng = StdRng::seed_from_u64(seed);
        while game.phase() == Phase::AwaitingHumanMove {
            let legal = game.board().legal_moves();
            let col = legal[rng.random_range(0..legal.len())];
            game.submit_move(col).unwrap();
            assert_gravity(game.board());
        }
        assert!(matches!(game.phase(), Phase::GameOver(_)));
        if game.outcome() == GameOutcome::AutomatedWin {
            wins += 1;
        }
    }
    assert!(wins >= 8, "minimax won only {wins}/{games} against random play");
}

#[test]
fn random_opponent_games_finish() {
    for seed in 0..5 {
        let mut game = GameController::new(Box::new(RandomAgent::with_seed(seed)));
        let mut rng = StdRng::seed_from_u64(seed + 100);
        let mut turns = 0;
        while game.phase() == Phase::AwaitingHumanMove {
            let legal = game.board().legal_moves();
            let col = legal[rng.random_range(0..legal.len())];
            game.submit_move(col).unwrap();
            assert_gravity(game.board());
            turns += 1;
        }
        assert!(turns <= (ROWS * COLS).div_ceil(2));
        assert_eq!(game.history().len(), game.board().disc_count());
    }
}

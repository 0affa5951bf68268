//! Turn management for one session: accepts human columns, answers with the
//! automated side's move, and reports when the game ends.

mod observer;

pub use observer::{ChannelObserver, GameObserver, GameUpdate, Placement};

use crate::ai::{Agent, MinimaxAgent, RandomAgent};
use crate::config::{AppConfig, OpponentKind};
use crate::error::MoveError;
use crate::game::{Board, GameOutcome, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHumanMove,
    AwaitingAutomatedMove,
    GameOver(GameOutcome),
}

/// What happened during one accepted `submit_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub human: Placement,
    /// `None` when the human move ended the game.
    pub automated: Option<Placement>,
    pub outcome: GameOutcome,
}

/// Owns the live board and drives the state machine
/// `AwaitingHumanMove -> AwaitingAutomatedMove -> AwaitingHumanMove`, ending
/// in `GameOver`.
///
/// The automated reply runs inside `submit_move`, so callers only ever see
/// `AwaitingHumanMove` or `GameOver` between calls. Observers see every
/// intermediate state.
pub struct GameController {
    board: Board,
    phase: Phase,
    history: Vec<Placement>,
    opponent: Box<dyn Agent>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameController {
    pub fn new(opponent: Box<dyn Agent>) -> Self {
        GameController {
            board: Board::new(),
            phase: Phase::AwaitingHumanMove,
            history: Vec::new(),
            opponent,
            observers: Vec::new(),
        }
    }

    /// Controller whose opponent is chosen by the configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let opponent: Box<dyn Agent> = match config.game.opponent {
            OpponentKind::Minimax => Box::new(MinimaxAgent::new(config.search)),
            OpponentKind::Random => match config.game.seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
        };
        Self::new(opponent)
    }

    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Outcome derived from the live board.
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::of(&self.board)
    }

    /// Discs placed this session, in order.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }

    /// Play a human disc in `column`, then let the automated side reply.
    ///
    /// A rejected column leaves the board, phase and history untouched.
    pub fn submit_move(&mut self, column: usize) -> Result<TurnReport, MoveError> {
        if let Phase::GameOver(outcome) = self.phase {
            tracing::debug!(column, ?outcome, "move rejected after game over");
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, Side::Human)
            .inspect_err(|err| tracing::debug!(column, %err, "move rejected"))?;
        let human = self.place(Side::Human, column, row);
        tracing::info!(column, row, "human move");

        let automated = if self.phase == Phase::AwaitingAutomatedMove {
            self.play_automated()
        } else {
            None
        };

        let outcome = self.outcome();
        if outcome.is_terminal() {
            tracing::info!(?outcome, moves = self.history.len(), "game over");
        }

        Ok(TurnReport {
            human,
            automated,
            outcome,
        })
    }

    /// Start a new session on an empty board.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.phase = Phase::AwaitingHumanMove;
        self.history.clear();
        self.notify(None);
    }

    fn play_automated(&mut self) -> Option<Placement> {
        let choice = self.opponent.select_move(&self.board);
        let legal = self.board.legal_moves();

        let column = match choice {
            Some(col) if self.board.is_legal(col) => col,
            Some(col) => {
                tracing::warn!(
                    column = col,
                    agent = self.opponent.name(),
                    "agent chose an illegal column, falling back"
                );
                match legal.first() {
                    Some(&first) => first,
                    None => return self.search_exhausted(),
                }
            }
            None => return self.search_exhausted(),
        };

        match self.board.drop_piece(column, Side::Automated) {
            Ok(row) => {
                tracing::info!(column, row, agent = self.opponent.name(), "automated move");
                Some(self.place(Side::Automated, column, row))
            }
            Err(err) => {
                tracing::warn!(column, %err, "automated move failed");
                self.search_exhausted()
            }
        }
    }

    /// The opponent had nothing to play. Only a finished board should get
    /// here; anything else hands the turn back.
    fn search_exhausted(&mut self) -> Option<Placement> {
        let outcome = self.outcome();
        self.phase = if outcome.is_terminal() {
            Phase::GameOver(outcome)
        } else {
            tracing::warn!("no automated move on an open board, returning turn");
            Phase::AwaitingHumanMove
        };
        None
    }

    fn place(&mut self, side: Side, column: usize, row: usize) -> Placement {
        let placement = Placement { side, column, row };
        self.history.push(placement);
        self.phase = match self.outcome() {
            GameOutcome::InProgress => match side {
                Side::Human => Phase::AwaitingAutomatedMove,
                Side::Automated => Phase::AwaitingHumanMove,
            },
            outcome => Phase::GameOver(outcome),
        };
        self.notify(Some(placement));
        placement
    }

    fn notify(&mut self, last_move: Option<Placement>) {
        let update = GameUpdate {
            board: self.board,
            phase: self.phase,
            outcome: self.outcome(),
            last_move,
        };
        for observer in &mut self.observers {
            observer.on_update(&update);
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(Box::new(MinimaxAgent::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Plays a fixed list of columns.
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

    #[test]
    fn test_initial_state() {
        let game = GameController::default();
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
        assert_eq!(game.outcome(), GameOutcome::InProgress);
        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_move_and_reply() {
        let mut game = scripted(&[6]);
        let report = game.submit_move(3).unwrap();

        assert_eq!(report.human, Placement { side: Side::Human, column: 3, row: 5 });
        assert_eq!(
            report.automated,
            Some(Placement { side: Side::Automated, column: 6, row: 5 })
        );
        assert_eq!(report.outcome, GameOutcome::InProgress);
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = scripted(&[]);
        assert_eq!(game.submit_move(7), Err(MoveError::ColumnOutOfRange(7)));
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
    }

    #[test]
    fn test_illegal_agent_column_falls_back() {
        let mut game = scripted(&[9]);
        let report = game.submit_move(3).unwrap();
        assert_eq!(report.automated.map(|p| p.column), Some(0));
    }

    #[test]
    fn test_exhausted_agent_returns_turn() {
        let mut game = scripted(&[]);
        let report = game.submit_move(3).unwrap();
        assert_eq!(report.automated, None);
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
        assert!(game.submit_move(3).is_ok());
    }

    #[test]
    fn test_reset() {
        let mut game = scripted(&[0]);
        game.submit_move(1).unwrap();
        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_from_config_picks_opponent() {
        let mut config = AppConfig::default();
        assert_eq!(GameController::from_config(&config).opponent_name(), "Minimax");
        config.game.opponent = OpponentKind::Random;
        config.game.seed = Some(3);
        assert_eq!(GameController::from_config(&config).opponent_name(), "Random");
    }
}

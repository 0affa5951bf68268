use crate::controller::{ChannelObserver, GameController, GameUpdate, TurnReport};
use crate::error::MoveError;
use crate::game::COLS;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::sync::mpsc;

pub struct App {
    controller: GameController,
    updates: mpsc::Receiver<GameUpdate>,
    last_update: Option<GameUpdate>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(mut controller: GameController) -> Self {
        let (observer, updates) = ChannelObserver::channel();
        controller.subscribe(Box::new(observer));
        App {
            controller,
            updates,
            last_update: None,
            selected_column: COLS / 2,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            self.drain_updates();
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Keep only the newest snapshot; it carries the last placement to highlight.
    fn drain_updates(&mut self) {
        while let Ok(update) = self.updates.try_recv() {
            self.last_update = Some(update);
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='7') => {
                let column = c as usize - '1' as usize;
                self.selected_column = column;
                self.drop_piece(column);
            }
            KeyCode::Char('r') => {
                self.controller.reset();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a disc in `column` and let the opponent answer
    fn drop_piece(&mut self, column: usize) {
        self.message = Some(match self.controller.submit_move(column) {
            Ok(report) => Self::describe_turn(&report),
            Err(MoveError::ColumnFull(col)) => format!("Column {} is full!", col + 1),
            Err(MoveError::ColumnOutOfRange(col)) => format!("Column {} does not exist!", col + 1),
            Err(MoveError::GameOver) => "Game over! Press 'r' to restart.".to_string(),
        });
    }

    fn describe_turn(report: &TurnReport) -> String {
        if report.outcome.is_terminal() {
            return format!("{} Press 'r' to play again.", report.outcome.describe());
        }
        match report.automated {
            Some(reply) => format!("Computer played column {}.", reply.column + 1),
            None => "Computer passed.".to_string(),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.controller,
            self.last_update.as_ref().and_then(|u| u.last_move),
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameController::default())
    }
}

//! Core Connect Four rules: the board and its gravity, the two sides, win
//! detection over every four-cell window, and copy-on-branch move simulation.

mod board;
mod movegen;
mod outcome;
mod side;
mod win;
pub mod window;

pub use board::{Board, Cell, CENTER_COL, COLS, ROWS};
pub use movegen::simulate;
pub use outcome::GameOutcome;
pub use side::Side;
pub use win::has_four;

//! Front ends for the controller: a ratatui terminal UI and a plain
//! line-based driver for headless play.

mod app;
mod game_view;
pub mod text;

pub use app::App;

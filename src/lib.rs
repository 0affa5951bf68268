//! # Connect Four Minimax
//!
//! Connect Four on the standard 6x7 board against an automated opponent that
//! picks moves with depth-limited minimax search and alpha-beta pruning.
//! The engine runs headlessly; a Ratatui terminal UI and a line-based driver
//! sit on top of it.
//!
//! ## Modules
//!
//! - [`game`]: Board, sides, win detection, move simulation
//! - [`ai`]: Window heuristic, minimax searcher, agents
//! - [`controller`]: Turn state machine and observer notifications
//! - [`ui`]: Terminal UI and headless text driver
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod ui;

//! Move selection for the automated side: the window heuristic, the
//! alpha-beta minimax searcher, and the agents that wrap them.

mod agent;
pub mod heuristic;
pub mod minimax;
mod random;

pub use agent::{Agent, MinimaxAgent};
pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::{Minimax, SearchConfig, SearchResult, SearchStats};
pub use random::RandomAgent;

use crate::game::Board;

use super::minimax::{Minimax, SearchConfig};

/// Interface for whatever plays the automated side.
pub trait Agent: Send {
    /// Choose a column for the automated side, or `None` when the position
    /// offers no move.
    fn select_move(&mut self, board: &Board) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Agent backed by the alpha-beta minimax searcher.
pub struct MinimaxAgent {
    minimax: Minimax,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig) -> Self {
        MinimaxAgent {
            minimax: Minimax::new(config),
        }
    }

    pub fn with_depth(depth: usize) -> Self {
        Self::new(SearchConfig {
            depth,
            ..SearchConfig::default()
        })
    }

    pub fn from_minimax(minimax: Minimax) -> Self {
        MinimaxAgent { minimax }
    }

    pub fn depth(&self) -> usize {
        self.minimax.config().depth
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board) -> Option<usize> {
        self.minimax.best_move(board).column
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

use super::board::Board;
use super::side::Side;
use super::win::has_four;

/// Result of a position, derived from the board each time it is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    HumanWin,
    AutomatedWin,
    Draw,
}

impl GameOutcome {
    /// Classify a board. A four for either side wins; a full board without
    /// one is a draw.
    pub fn of(board: &Board) -> GameOutcome {
        if has_four(board, Side::Automated) {
            GameOutcome::AutomatedWin
        } else if has_four(board, Side::Human) {
            GameOutcome::HumanWin
        } else if board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// The winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameOutcome::HumanWin => Some(Side::Human),
            GameOutcome::AutomatedWin => Some(Side::Automated),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// Short status line for display.
    pub fn describe(self) -> &'static str {
        match self {
            GameOutcome::InProgress => "Game in progress",
            GameOutcome::HumanWin => "You win!",
            GameOutcome::AutomatedWin => "Computer wins!",
            GameOutcome::Draw => "It's a draw!",
        }
    }
}

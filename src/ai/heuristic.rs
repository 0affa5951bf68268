use crate::game::window::WINDOWS;
use crate::game::{Board, Side, CENTER_COL, ROWS};

/// Trait for evaluating a board position from one side's perspective.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, side: Side) -> i32;
}

pub const CENTER_WEIGHT: i32 = 3;
pub const FOUR_SCORE: i32 = 100;
pub const THREE_SCORE: i32 = 5;
pub const TWO_SCORE: i32 = 2;
pub const OPPONENT_THREE_PENALTY: i32 = 4;

/// Default heuristic: a center-column bonus plus a score for every 4-cell
/// window on the board.
///
/// Only the evaluated side earns the center bonus; opposing discs in the
/// middle column are not penalised.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    /// Score one window from its cell counts. The opponent-three penalty is
    /// applied on top of whatever the own counts earned.
    pub fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        let mut score = 0;
        if own == 4 {
            score += FOUR_SCORE;
        } else if own == 3 && empty == 1 {
            score += THREE_SCORE;
        } else if own == 2 && empty == 2 {
            score += TWO_SCORE;
        }
        if opp == 3 && empty == 1 {
            score -= OPPONENT_THREE_PENALTY;
        }
        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, side: Side) -> i32 {
        let own_cell = side.to_cell();
        let opp_cell = side.other().to_cell();

        let center = (0..ROWS)
            .filter(|&row| board.get(row, CENTER_COL) == own_cell)
            .count() as i32;
        let mut score = center * CENTER_WEIGHT;

        for window in WINDOWS.iter() {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for &(row, col) in window {
                match board.get(row, col) {
                    c if c == own_cell => own += 1,
                    c if c == opp_cell => opp += 1,
                    _ => empty += 1,
                }
            }
            score += Self::score_window(own, opp, empty);
        }

        score
    }
}

//! Every run of four cells on the board, shared by the win detector and the
//! heuristic evaluator.

use super::board::{COLS, ROWS};

/// Four `(row, col)` coordinates in board order.
pub type Window = [(usize, usize); 4];

pub const WINDOW_COUNT: usize =
    ROWS * (COLS - 3) + (ROWS - 3) * COLS + 2 * (ROWS - 3) * (COLS - 3);

/// Windows grouped by orientation: horizontal, vertical, diagonal down-right,
/// diagonal down-left.
pub static WINDOWS: [Window; WINDOW_COUNT] = build_windows();

const fn build_windows() -> [Window; WINDOW_COUNT] {
    let mut out = [[(0, 0); 4]; WINDOW_COUNT];
    let mut n = 0;

    let mut row = 0;
    while row < ROWS {
        let mut col = 0;
        while col + 3 < COLS {
            out[n] = [(row, col), (row, col + 1), (row, col + 2), (row, col + 3)];
            n += 1;
            col += 1;
        }
        row += 1;
    }

    let mut col = 0;
    while col < COLS {
        let mut row = 0;
        while row + 3 < ROWS {
            out[n] = [(row, col), (row + 1, col), (row + 2, col), (row + 3, col)];
            n += 1;
            row += 1;
        }
        col += 1;
    }

    let mut row = 0;
    while row + 3 < ROWS {
        let mut col = 0;
        while col + 3 < COLS {
            out[n] = [
                (row, col),
                (row + 1, col + 1),
                (row + 2, col + 2),
                (row + 3, col + 3),
            ];
            n += 1;
            col += 1;
        }
        row += 1;
    }

    let mut row = 0;
    while row + 3 < ROWS {
        let mut col = 3;
        while col < COLS {
            out[n] = [
                (row, col),
                (row + 1, col - 1),
                (row + 2, col - 2),
                (row + 3, col - 3),
            ];
            n += 1;
            col += 1;
        }
        row += 1;
    }

    out
}

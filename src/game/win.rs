use super::board::Board;
use super::side::Side;
use super::window::WINDOWS;

/// True when `side` owns every cell of at least one window.
pub fn has_four(board: &Board, side: Side) -> bool {
    let cell = side.to_cell();
    WINDOWS
        .iter()
        .any(|window| window.iter().all(|&(row, col)| board.get(row, col) == cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{Cell, COLS, ROWS};
    use crate::game::window::Window;

    /// Build a board holding exactly the given window for `side`. Ignores
    /// gravity, which the detector does not care about.
    fn board_with(window: &Window, side: Side) -> Board {
        let mut rows = [['.'; COLS]; ROWS];
        for &(row, col) in window {
            rows[row][col] = side.to_cell().symbol();
        }
        // Fill below each disc with the opposing side so the rows parse.
        for col in 0..COLS {
            let top = (0..ROWS).find(|&row| rows[row][col] != '.');
            if let Some(top) = top {
                for row in top..ROWS {
                    if rows[row][col] == '.' {
                        rows[row][col] = side.other().to_cell().symbol();
                    }
                }
            }
        }
        let text: Vec<String> = rows.iter().map(|r| r.iter().collect()).collect();
        let refs: Vec<&str> = text.iter().map(String::as_str).collect();
        Board::from_rows(refs.try_into().unwrap()).unwrap()
    }

    #[test]
    fn empty_board_has_no_four() {
        let board = Board::new();
        assert!(!has_four(&board, Side::Human));
        assert!(!has_four(&board, Side::Automated));
    }

    #[test]
    fn detects_every_window_for_both_sides() {
        for side in [Side::Human, Side::Automated] {
            for window in WINDOWS.iter() {
                let board = board_with(window, side);
                assert!(has_four(&board, side), "missed {window:?} for {side:?}:\n{board}");
            }
        }
    }

    #[test]
    fn test_horizontal_win() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "..HHHH.",
        ])
        .unwrap();
        assert!(has_four(&board, Side::Human));
        assert!(!has_four(&board, Side::Automated));
    }

    #[test]
    fn test_vertical_win() {
        let board = Board::from_rows([
            ".......",
            ".......",
            "......A",
            "......A",
            "......A",
            "H.....A",
        ])
        .unwrap();
        assert!(has_four(&board, Side::Automated));
        assert!(!has_four(&board, Side::Human));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let board = Board::from_rows([
            ".......",
            ".......",
            "...A...",
            "...HA..",
            "...HHA.",
            "...HHHA",
        ])
        .unwrap();
        assert!(has_four(&board, Side::Automated));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let board = Board::from_rows([
            "......H",
            ".....HA",
            "....HAA",
            "...HAAH",
            "...HHHA",
            "...HAAH",
        ])
        .unwrap();
        assert!(has_four(&board, Side::Human));
        assert!(!has_four(&board, Side::Automated));
    }

    #[test]
    fn test_no_win_with_three() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            "A......",
            "A......",
            "AHHH...",
        ])
        .unwrap();
        assert!(!has_four(&board, Side::Human));
        assert!(!has_four(&board, Side::Automated));
    }

    #[test]
    fn full_drawn_board_has_no_four() {
        let board = Board::from_rows([
            "HHAAHHA",
            "AAHHAAH",
            "HHAAHHA",
            "AAHHAAH",
            "HHAAHHA",
            "AAHHAAH",
        ])
        .unwrap();
        assert!(board.is_full());
        assert!(!has_four(&board, Side::Human));
        assert!(!has_four(&board, Side::Automated));
    }
}

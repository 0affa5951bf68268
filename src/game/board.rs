use std::fmt;

use super::side::Side;
use crate::error::{BoardParseError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CENTER_COL: usize = COLS / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Automated,
}

impl Cell {
    /// Single-character form used by `Display` and `Board::from_rows`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'H',
            Cell::Automated => 'A',
        }
    }

    fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Empty),
            'H' => Some(Cell::Human),
            'A' => Some(Cell::Automated),
            _ => None,
        }
    }
}

/// The 6x7 grid. Row 0 is the top, row 5 is the bottom.
///
/// `Board` is `Copy`: anything exploring a hypothetical future works on its
/// own copy and never touches the caller's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from six text rows, top row first.
    ///
    /// Each row holds seven of `.`, `H`, `A`; whitespace is ignored. Rows
    /// that leave a disc hanging over an empty cell are rejected.
    pub fn from_rows(rows: [&str; ROWS]) -> Result<Self, BoardParseError> {
        let mut cells = [[Cell::Empty; COLS]; ROWS];

        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != COLS {
                return Err(BoardParseError::RowLength {
                    row,
                    len: symbols.len(),
                    expected: COLS,
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                cells[row][col] = Cell::from_symbol(symbol)
                    .ok_or(BoardParseError::InvalidSymbol { row, col, symbol })?;
            }
        }

        for col in 0..COLS {
            for row in 1..ROWS {
                if cells[row][col] == Cell::Empty && cells[row - 1][col] != Cell::Empty {
                    return Err(BoardParseError::Floating { row: row - 1, col });
                }
            }
        }

        Ok(Board { cells })
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// A column accepts a disc when it exists and its top cell is empty.
    pub fn is_legal(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// Legal columns in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_legal(col)).collect()
    }

    /// Drop a disc for `side` in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, side: Side) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::ColumnOutOfRange(col));
        }

        // Lowest empty row wins
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = side.to_cell();
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull(col))
    }

    /// Number of discs stacked in a column.
    pub fn column_height(&self, col: usize) -> usize {
        (0..ROWS)
            .filter(|&row| self.cells[row][col] != Cell::Empty)
            .count()
    }

    /// Total number of discs on the board.
    pub fn disc_count(&self) -> usize {
        (0..COLS).map(|col| self.column_height(col)).sum()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_legal(col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

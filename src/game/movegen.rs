use super::board::Board;
use super::side::Side;
use crate::error::MoveError;

/// Return a copy of `board` with `side`'s disc dropped into `col`.
///
/// The input board is left untouched, so sibling branches of a search can
/// each start from the same parent. Fails exactly like `Board::drop_piece`.
pub fn simulate(board: &Board, col: usize, side: Side) -> Result<Board, MoveError> {
    let mut next = *board;
    next.drop_piece(col, side)?;
    Ok(next)
}

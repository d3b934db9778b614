//! # Board Transition Engine
//!
//! Applies one full move to a board by running the line mover over every
//! row or column.

use super::{next_line, Axis, Board, BoardMatrix, Direction, Move};
use crate::config::{COLUMN_LENGTH, ROW_LENGTH};

/// Returns the board that results from moving every line of `board` along
/// `axis` toward `direction`.
///
/// The input board is left untouched. No spawn happens here and a move that
/// changes nothing simply returns an equivalent board; callers compare with
/// [`Board::same_layout`] to tell.
///
/// # Examples
///
/// ```
/// use twenty48::{next_board, Axis, Board, Direction, Position, Tile};
/// use uuid::Uuid;
///
/// let board = Board::from_tiles(vec![
///     Tile::new(Uuid::from_u128(1), 2, Position::new(0, 0)),
///     Tile::new(Uuid::from_u128(2), 2, Position::new(3, 0)),
/// ]);
/// let next = next_board(&board, Axis::X, Direction::Positive);
///
/// assert_eq!(next.len(), 1);
/// assert_eq!(next.tiles()[0].value, 4);
/// assert_eq!(next.tiles()[0].position, Position::new(3, 0));
/// ```
pub fn next_board(board: &Board, axis: Axis, direction: Direction) -> Board {
    let matrix = BoardMatrix::from_board(board);
    let next = next_matrix(&matrix, axis, direction);
    let result = next.to_board();

    log::debug!(
        "move {:?}/{:?}: {} tiles -> {} tiles",
        axis,
        direction,
        board.len(),
        result.len()
    );
    result
}

/// Convenience wrapper over [`next_board`] for a player move.
pub fn apply_move(board: &Board, mv: Move) -> Board {
    let (axis, direction) = mv.axis_direction();
    next_board(board, axis, direction)
}

/// Moves every row (axis `X`) or column (axis `Y`) of a matrix.
pub fn next_matrix(matrix: &BoardMatrix, axis: Axis, direction: Direction) -> BoardMatrix {
    let mut next = *matrix;

    match axis {
        Axis::X => {
            for y in 0..COLUMN_LENGTH {
                next.set_row(y, next_line(matrix.row(y), direction));
            }
        }
        Axis::Y => {
            for x in 0..ROW_LENGTH {
                next.set_column(x, next_line(matrix.column(x), direction));
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Tile};
    use uuid::Uuid;

    fn tile(n: u128, value: u32, x: usize, y: usize) -> Tile {
        Tile::new(Uuid::from_u128(n), value, Position::new(x, y))
    }

    #[test]
    fn test_rows_move_independently() {
        let board = Board::from_tiles(vec![
            tile(1, 2, 1, 0),
            tile(2, 2, 3, 0),
            tile(3, 4, 2, 1),
        ]);
        let next = next_board(&board, Axis::X, Direction::Negative);

        let expected = Board::from_tiles(vec![tile(2, 4, 0, 0), tile(3, 4, 0, 1)]);
        assert_eq!(next, expected);
    }

    #[test]
    fn test_columns_move_down() {
        let board = Board::from_tiles(vec![
            tile(1, 2, 0, 0),
            tile(2, 2, 0, 1),
            tile(3, 8, 2, 0),
        ]);
        let next = next_board(&board, Axis::Y, Direction::Positive);

        let expected = Board::from_tiles(vec![tile(1, 4, 0, 3), tile(3, 8, 2, 3)]);
        assert_eq!(next, expected);
    }

    #[test]
    fn test_columns_move_up_takes_trailing_id() {
        let board = Board::from_tiles(vec![tile(1, 2, 1, 1), tile(2, 2, 1, 3)]);
        let next = apply_move(&board, Move::Up);

        assert_eq!(next, Board::from_tiles(vec![tile(2, 4, 1, 0)]));
    }

    #[test]
    fn test_input_board_is_not_mutated() {
        let board = Board::from_tiles(vec![tile(1, 2, 3, 3), tile(2, 2, 2, 3)]);
        let snapshot = board.clone();
        let _ = next_board(&board, Axis::X, Direction::Negative);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_no_op_move_keeps_layout() {
        let board = Board::from_tiles(vec![tile(1, 4, 0, 0), tile(2, 2, 1, 0)]);
        let next = apply_move(&board, Move::Left);
        assert!(next.same_layout(&board));
    }

    #[test]
    fn test_empty_board() {
        for mv in Move::all() {
            assert!(apply_move(&Board::new(), mv).is_empty());
        }
    }
}

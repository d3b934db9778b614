//! # Board Matrix Projection
//!
//! Dense `[y][x]` view of a board used while a move is computed.

use super::{Board, Position, Tile, TileId};
use crate::config::{COLUMN_LENGTH, ROW_LENGTH};

/// Identity and value of a tile while it is in motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixTile {
    pub id: TileId,
    pub value: u32,
}

impl MatrixTile {
    pub fn new(id: TileId, value: u32) -> Self {
        Self { id, value }
    }
}

/// One grid cell, empty or holding a tile.
pub type Cell = Option<MatrixTile>;

/// A single row of the matrix.
pub type Row = [Cell; ROW_LENGTH];

/// A single column of the matrix.
pub type Column = [Cell; COLUMN_LENGTH];

/// Fixed-size grid of optional cells indexed `[y][x]`.
///
/// The matrix is a plain `Copy` value: it is built fresh for each move and
/// dropped once the next board has been reassembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardMatrix {
    cells: [Row; COLUMN_LENGTH],
}

impl BoardMatrix {
    /// Creates a matrix with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [[None; ROW_LENGTH]; COLUMN_LENGTH],
        }
    }

    /// Projects a board onto a fresh matrix.
    ///
    /// Two tiles on the same cell is a caller bug: the later tile overwrites
    /// the earlier one, and debug builds assert.
    pub fn from_board(board: &Board) -> Self {
        let mut matrix = Self::empty();
        for tile in board.tiles() {
            let Position { x, y } = tile.position;
            debug_assert!(tile.position.in_bounds(), "tile out of bounds: {tile:?}");
            debug_assert!(
                matrix.cells[y][x].is_none(),
                "more than one tile at {:?}",
                tile.position
            );
            matrix.cells[y][x] = Some(MatrixTile::new(tile.id, tile.value));
        }
        matrix
    }

    /// Reassembles the matrix into a board, walking cells row by row.
    pub fn to_board(&self) -> Board {
        let tiles = self
            .cells
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter().copied().enumerate().filter_map(move |(x, cell)| {
                    cell.map(|cell| Tile::new(cell.id, cell.value, Position::new(x, y)))
                })
            })
            .collect();
        Board::from_tiles(tiles)
    }

    pub fn cell(&self, position: Position) -> Cell {
        self.cells[position.y][position.x]
    }

    pub fn row(&self, y: usize) -> Row {
        self.cells[y]
    }

    pub fn set_row(&mut self, y: usize, row: Row) {
        self.cells[y] = row;
    }

    /// Extracts column `x` in row order.
    pub fn column(&self, x: usize) -> Column {
        let mut column = [None; COLUMN_LENGTH];
        for (y, cell) in column.iter_mut().enumerate() {
            *cell = self.cells[y][x];
        }
        column
    }

    /// Writes `column` back into column `x`.
    pub fn set_column(&mut self, x: usize, column: Column) {
        for (y, cell) in column.into_iter().enumerate() {
            self.cells[y][x] = cell;
        }
    }
}

/// Projects a board onto a dense matrix.
pub fn to_matrix(board: &Board) -> BoardMatrix {
    BoardMatrix::from_board(board)
}

/// Reassembles a dense matrix into a board.
pub fn from_matrix(matrix: &BoardMatrix) -> Board {
    matrix.to_board()
}

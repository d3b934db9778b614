//! # Board Module
//!
//! Tile, board and grid coordinate types plus the sliding engine that
//! turns one board into the next.
//!
//! This module contains the building blocks of the puzzle:
//! - Position codec for set-membership keys
//! - Matrix projection between tile lists and dense grids
//! - Line mover implementing slide and merge for one row or column
//! - Board transition engine applying a move to every line

pub mod codec;
pub mod line;
pub mod matrix;
pub mod transition;

pub use codec::*;
pub use line::*;
pub use matrix::*;
pub use transition::*;

use crate::config::{COLUMN_LENGTH, ROW_LENGTH};
use crate::{Twenty48Error, Twenty48Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Represents a cell coordinate on the grid.
///
/// `x` indexes within a row, `y` indexes within a column; `(0, 0)` is the
/// top-left cell.
///
/// # Examples
///
/// ```
/// use twenty48::Position;
///
/// let pos = Position::new(3, 1);
/// assert_eq!(pos.x, 3);
/// assert_eq!(pos.y, 1);
/// assert!(pos.in_bounds());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns true if the position lies inside the fixed grid.
    pub fn in_bounds(self) -> bool {
        self.x < ROW_LENGTH && self.y < COLUMN_LENGTH
    }
}

/// Selects whether a move operates row-wise (`X`) or column-wise (`Y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Sliding direction along an axis.
///
/// `Positive` pushes tiles toward the higher-index end of each line,
/// `Negative` toward index zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Positive,
    Negative,
}

/// Player-facing move commands.
///
/// # Examples
///
/// ```
/// use twenty48::{Axis, Direction, Move};
///
/// assert_eq!(Move::Up.axis_direction(), (Axis::Y, Direction::Negative));
/// assert_eq!(Move::Right.axis_direction(), (Axis::X, Direction::Positive));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Converts the command into the axis and direction the engine works with.
    pub fn axis_direction(self) -> (Axis, Direction) {
        match self {
            Move::Up => (Axis::Y, Direction::Negative),
            Move::Down => (Axis::Y, Direction::Positive),
            Move::Left => (Axis::X, Direction::Negative),
            Move::Right => (Axis::X, Direction::Positive),
        }
    }

    /// Returns all four moves.
    pub fn all() -> [Move; 4] {
        [Move::Up, Move::Down, Move::Left, Move::Right]
    }
}

/// Unique identifier for tiles.
pub type TileId = Uuid;

/// A single numbered piece on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Identity, stable across moves unless the tile merges
    pub id: TileId,
    /// Face value
    pub value: u32,
    /// Cell the tile rests on
    pub position: Position,
}

impl Tile {
    /// Creates a new tile.
    pub fn new(id: TileId, value: u32, position: Position) -> Self {
        Self {
            id,
            value,
            position,
        }
    }
}

/// The complete set of tiles at one point in time.
///
/// Tile order carries no meaning: equality compares tiles regardless of the
/// order they were stored in. Boards are never mutated by the engine; every
/// move and every spawn produces a new value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Creates a board from a list of tiles.
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48::{Board, Position, Tile};
    /// use uuid::Uuid;
    ///
    /// let board = Board::from_tiles(vec![Tile::new(Uuid::nil(), 2, Position::new(0, 0))]);
    /// assert_eq!(board.len(), 1);
    /// assert_eq!(board.total_value(), 2);
    /// ```
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Returns the tiles of this board.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns true when every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.tiles.len() >= ROW_LENGTH * COLUMN_LENGTH
    }

    /// Returns the tile resting at `position`, if any.
    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.position == position)
    }

    /// Returns a tile by id.
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    /// Sum of all tile values.
    pub fn total_value(&self) -> u64 {
        self.tiles.iter().map(|tile| tile.value as u64).sum()
    }

    /// Returns a new board holding every tile of this one plus `tile`.
    pub fn with_tile(&self, tile: Tile) -> Board {
        let mut tiles = Vec::with_capacity(self.tiles.len() + 1);
        tiles.extend_from_slice(&self.tiles);
        tiles.push(tile);
        Board { tiles }
    }

    /// Position keys of every occupied cell.
    pub fn occupied_keys(&self) -> HashSet<String> {
        self.tiles
            .iter()
            .map(|tile| position_to_key(tile.position))
            .collect()
    }

    /// Positions and values sorted by position, ignoring identity.
    pub fn layout(&self) -> Vec<(Position, u32)> {
        let mut layout: Vec<_> = self
            .tiles
            .iter()
            .map(|tile| (tile.position, tile.value))
            .collect();
        layout.sort_unstable();
        layout
    }

    /// Compares two boards by positions and values only.
    ///
    /// This is the comparison a turn uses to decide whether a move changed
    /// the board and a new tile should spawn.
    pub fn same_layout(&self, other: &Board) -> bool {
        self.len() == other.len() && self.layout() == other.layout()
    }

    /// Checks the at-rest invariants: every tile in bounds, no shared cells,
    /// every value a power of two.
    pub fn validate(&self) -> Twenty48Result<()> {
        let mut seen = HashSet::with_capacity(self.tiles.len());
        for tile in &self.tiles {
            if !tile.position.in_bounds() {
                return Err(Twenty48Error::InvariantViolated(format!(
                    "tile {} out of bounds at {:?}",
                    tile.id, tile.position
                )));
            }
            if !tile.value.is_power_of_two() {
                return Err(Twenty48Error::InvariantViolated(format!(
                    "tile {} has value {}, not a power of two",
                    tile.id, tile.value
                )));
            }
            if !seen.insert(tile.position) {
                return Err(Twenty48Error::InvariantViolated(format!(
                    "more than one tile at {:?}",
                    tile.position
                )));
            }
        }
        Ok(())
    }

    fn sorted_tiles(&self) -> Vec<Tile> {
        let mut tiles = self.tiles.clone();
        tiles.sort_unstable_by_key(|tile| (tile.position, tile.id));
        tiles
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.sorted_tiles() == other.sorted_tiles()
    }
}

impl Eq for Board {}

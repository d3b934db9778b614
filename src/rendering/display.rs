//! # Display Management
//!
//! Draws boards as fixed-width text grids.

use crate::board::{Board, Position};
use crate::config::{COLUMN_LENGTH, ROW_LENGTH};
use crate::Twenty48Result;
use std::fmt::Write;

/// Text renderer for board snapshots.
pub struct TextRenderer {
    /// Width of each cell in characters
    pub cell_width: usize,
    /// Character drawn in empty cells
    pub empty_cell: char,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer {
    /// Creates a renderer with cells wide enough for five-digit values.
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48::{Board, TextRenderer};
    ///
    /// let text = TextRenderer::new().render(&Board::new());
    /// assert_eq!(text.lines().count(), 9);
    /// ```
    pub fn new() -> Self {
        Self {
            cell_width: 6,
            empty_cell: '.',
        }
    }

    /// Renders `board` as a grid with one text row per board row.
    pub fn render(&self, board: &Board) -> String {
        let border = self.border();
        let mut out = String::new();

        out.push_str(&border);
        for y in 0..COLUMN_LENGTH {
            out.push('|');
            for x in 0..ROW_LENGTH {
                let label = match board.tile_at(Position::new(x, y)) {
                    Some(tile) => tile.value.to_string(),
                    None => self.empty_cell.to_string(),
                };
                let _ = write!(out, "{:^width$}|", label, width = self.cell_width);
            }
            out.push('\n');
            out.push_str(&border);
        }

        out
    }

    fn border(&self) -> String {
        let mut border = String::from("+");
        for _ in 0..ROW_LENGTH {
            border.push_str(&"-".repeat(self.cell_width));
            border.push('+');
        }
        border.push('\n');
        border
    }
}

/// Serializes a board snapshot as pretty-printed JSON.
pub fn render_json(board: &Board) -> Twenty48Result<String> {
    Ok(serde_json::to_string_pretty(board)?)
}

//! # Rendering Module
//!
//! Plain-text and JSON views of board snapshots for the terminal front end.

pub mod display;

pub use display::*;

use crate::config::TILE_COLORS;

/// Picks the palette color for a tile value.
///
/// `2` maps to the first color, `4` to the second and so on; values past the
/// end of the palette reuse the last color.
///
/// # Examples
///
/// ```
/// use twenty48::tile_color;
///
/// assert_eq!(tile_color(2), "#f0e9de");
/// assert_eq!(tile_color(4), "#efe3cf");
/// assert_eq!(tile_color(1 << 20), "#e8be4e");
/// ```
pub fn tile_color(value: u32) -> &'static str {
    let tier = value.max(2).ilog2() as usize - 1;
    TILE_COLORS[tier.min(TILE_COLORS.len() - 1)]
}

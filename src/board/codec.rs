//! # Position Codec
//!
//! Converts grid coordinates to and from the string keys used for
//! occupied/free cell bookkeeping.

use super::Position;
use crate::config::{COLUMN_LENGTH, ROW_LENGTH, TILE_POSITION_SEPARATOR};
use crate::{Twenty48Error, Twenty48Result};

/// Encodes a position as `"x-y"`.
///
/// # Examples
///
/// ```
/// use twenty48::{position_to_key, Position};
///
/// assert_eq!(position_to_key(Position::new(2, 3)), "2-3");
/// ```
pub fn position_to_key(position: Position) -> String {
    format!("{}{}{}", position.x, TILE_POSITION_SEPARATOR, position.y)
}

/// Decodes a key produced by [`position_to_key`].
///
/// Keys never leave the engine, so a malformed key means a caller bug; it is
/// reported as [`Twenty48Error::InvalidPositionKey`]. Only canonical keys of
/// cells on the grid decode: `"+1-02"` and `"9-9"` are both rejected.
pub fn key_to_position(key: &str) -> Twenty48Result<Position> {
    let invalid = || Twenty48Error::InvalidPositionKey(key.to_string());

    let (x, y) = key.split_once(TILE_POSITION_SEPARATOR).ok_or_else(invalid)?;
    let x = x.parse::<usize>().map_err(|_| invalid())?;
    let y = y.parse::<usize>().map_err(|_| invalid())?;

    let position = Position::new(x, y);
    if !position.in_bounds() || position_to_key(position) != key {
        return Err(invalid());
    }
    Ok(position)
}

/// Every cell key of the grid, `x` outer and `y` inner.
///
/// This is the universe random free-cell selection draws from, so the order
/// must stay stable for seeded runs to be reproducible.
pub fn all_keys() -> Vec<String> {
    let mut keys = Vec::with_capacity(ROW_LENGTH * COLUMN_LENGTH);
    for x in 0..ROW_LENGTH {
        for y in 0..COLUMN_LENGTH {
            keys.push(position_to_key(Position::new(x, y)));
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_format() {
        assert_eq!(position_to_key(Position::new(0, 0)), "0-0");
        assert_eq!(position_to_key(Position::new(3, 1)), "3-1");
    }

    #[test]
    fn test_key_inverse() {
        for key in all_keys() {
            let position = key_to_position(&key).unwrap();
            assert_eq!(position_to_key(position), key);
        }
    }

    #[test]
    fn test_malformed_keys() {
        for key in ["", "1", "1-", "-1", "a-b", "1_2", "1-2-3", "+1-2", "1-02", "+1-02", "01-1"] {
            assert!(
                matches!(key_to_position(key), Err(Twenty48Error::InvalidPositionKey(_))),
                "expected {key:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_off_grid_keys() {
        for key in ["4-0", "0-4", "9-9"] {
            assert!(
                matches!(key_to_position(key), Err(Twenty48Error::InvalidPositionKey(_))),
                "expected {key:?} to be rejected"
            );
        }
        assert_eq!(key_to_position("3-3").unwrap(), Position::new(3, 3));
    }

    #[test]
    fn test_all_keys_cover_grid() {
        let keys = all_keys();
        assert_eq!(keys.len(), ROW_LENGTH * COLUMN_LENGTH);

        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());

        assert_eq!(keys[0], "0-0");
        assert_eq!(keys[1], "0-1");
        assert_eq!(keys[COLUMN_LENGTH], "1-0");
    }
}

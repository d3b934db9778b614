//! # Line Mover
//!
//! Slides and merges a single row or column.
//!
//! A move runs three passes over each line:
//! 1. relocate occupied cells toward the direction's end,
//! 2. merge adjacent equal pairs, scanning from that end,
//! 3. relocate again to close the gaps merges left behind.

use super::{Cell, Direction, MatrixTile};

/// Computes the next state of one line for `direction`.
///
/// # Examples
///
/// ```
/// use twenty48::{next_line, Direction, MatrixTile};
/// use uuid::Uuid;
///
/// let a = MatrixTile::new(Uuid::from_u128(1), 2);
/// let b = MatrixTile::new(Uuid::from_u128(2), 2);
///
/// let line = next_line([Some(a), Some(b), None, None], Direction::Negative);
/// assert_eq!(line, [Some(MatrixTile::new(b.id, 4)), None, None, None]);
/// ```
pub fn next_line<const N: usize>(line: [Cell; N], direction: Direction) -> [Cell; N] {
    let relocated = relocate(line, direction);
    let joined = join_pairs(relocated, direction);
    relocate(joined, direction)
}

/// Packs occupied cells toward the direction's end, keeping their order.
pub fn relocate<const N: usize>(line: [Cell; N], direction: Direction) -> [Cell; N] {
    let occupied = line.iter().filter(|cell| cell.is_some()).count();
    let start = match direction {
        Direction::Negative => 0,
        Direction::Positive => N - occupied,
    };

    let mut next = [None; N];
    for (slot, cell) in next[start..].iter_mut().zip(line.into_iter().flatten()) {
        *slot = Some(cell);
    }
    next
}

/// Merges adjacent equal pairs once, scanning from the leading end.
///
/// The surviving cell sits nearer the leading end and takes the id of its
/// partner, the tile nearer the trailing end. The scan never restarts, so a
/// tile produced by a merge is not merged again in the same pass. Pairs whose
/// sum does not fit in a `u32` stay unmerged.
pub fn join_pairs<const N: usize>(mut line: [Cell; N], direction: Direction) -> [Cell; N] {
    if direction == Direction::Positive {
        line.reverse();
    }

    for i in 0..N.saturating_sub(1) {
        let (Some(current), Some(next)) = (line[i], line[i + 1]) else {
            continue;
        };
        if current.value != next.value {
            continue;
        }
        let Some(value) = current.value.checked_add(next.value) else {
            log::warn!("{} + {} overflows, leaving pair unmerged", current.value, next.value);
            continue;
        };

        log::trace!("merging {} into {} ({})", current.id, next.id, current.value);
        line[i] = Some(MatrixTile::new(next.id, value));
        line[i + 1] = None;
    }

    if direction == Direction::Positive {
        line.reverse();
    }
    line
}

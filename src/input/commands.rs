//! # Command Definitions
//!
//! Player commands and move-script parsing.

use crate::board::Move;
use crate::{Twenty48Error, Twenty48Result};

/// Player input types that can be processed by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Slide the board
    Move(Move),
    /// Deal a fresh board
    NewGame,
    /// Show help information
    Help,
    /// Quit the game
    Quit,
}

/// Parses a compact move script such as `"LLUR dd"`.
///
/// Each of `U`, `D`, `L`, `R` (any case) is one move; whitespace and commas
/// are skipped.
///
/// # Examples
///
/// ```
/// use twenty48::{parse_moves, Move};
///
/// let moves = parse_moves("lu, R").unwrap();
/// assert_eq!(moves, vec![Move::Left, Move::Up, Move::Right]);
/// assert!(parse_moves("LX").is_err());
/// ```
pub fn parse_moves(script: &str) -> Twenty48Result<Vec<Move>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c.to_ascii_uppercase() {
            'U' => Ok(Move::Up),
            'D' => Ok(Move::Down),
            'L' => Ok(Move::Left),
            'R' => Ok(Move::Right),
            other => Err(Twenty48Error::InvalidAction(format!(
                "unknown move '{}' in script",
                other
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(
            parse_moves("UDLR").unwrap(),
            vec![Move::Up, Move::Down, Move::Left, Move::Right]
        );
        assert!(parse_moves("").unwrap().is_empty());
        assert!(parse_moves(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_moves_rejects_unknown() {
        assert!(matches!(
            parse_moves("UQ"),
            Err(Twenty48Error::InvalidAction(_))
        ));
    }
}

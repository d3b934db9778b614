//! # Input Module
//!
//! Text command handling for the terminal front end.

pub mod commands;

pub use commands::*;

use crate::board::Move;

/// Input handler for processing player commands.
///
/// Turns one line of terminal input into a [`PlayerInput`].
pub struct InputHandler {
    /// Whether to enable Vi-style movement keys (hjkl)
    pub vi_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48::{InputHandler, Move, PlayerInput};
    ///
    /// let input_handler = InputHandler::new();
    /// assert_eq!(input_handler.parse("w"), Some(PlayerInput::Move(Move::Up)));
    /// assert_eq!(input_handler.parse("q"), Some(PlayerInput::Quit));
    /// ```
    pub fn new() -> Self {
        Self {
            vi_keys_enabled: true,
        }
    }

    /// Creates a handler with vi keys toggled as requested.
    pub fn with_vi_keys(vi_keys_enabled: bool) -> Self {
        Self { vi_keys_enabled }
    }

    /// Parses one line of input. Returns `None` for anything unrecognized.
    pub fn parse(&self, line: &str) -> Option<PlayerInput> {
        let command = line.trim().to_ascii_lowercase();

        let input = match command.as_str() {
            // Arrow key names and WASD
            "up" | "w" => PlayerInput::Move(Move::Up),
            "down" | "s" => PlayerInput::Move(Move::Down),
            "left" | "a" => PlayerInput::Move(Move::Left),
            "right" | "d" => PlayerInput::Move(Move::Right),

            "k" if self.vi_keys_enabled => PlayerInput::Move(Move::Up),
            "j" if self.vi_keys_enabled => PlayerInput::Move(Move::Down),
            "h" if self.vi_keys_enabled => PlayerInput::Move(Move::Left),
            "l" if self.vi_keys_enabled => PlayerInput::Move(Move::Right),

            "n" | "new" => PlayerInput::NewGame,
            "?" | "help" => PlayerInput::Help,
            "q" | "quit" | "exit" => PlayerInput::Quit,
            _ => {
                log::warn!("unrecognized input: {:?}", line.trim());
                return None;
            }
        };

        Some(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows() {
        let handler = InputHandler::new();
        assert_eq!(handler.parse("UP"), Some(PlayerInput::Move(Move::Up)));
        assert_eq!(handler.parse(" s \n"), Some(PlayerInput::Move(Move::Down)));
        assert_eq!(handler.parse("a"), Some(PlayerInput::Move(Move::Left)));
        assert_eq!(handler.parse("right"), Some(PlayerInput::Move(Move::Right)));
    }

    #[test]
    fn test_vi_keys_toggle() {
        let handler = InputHandler::new();
        assert_eq!(handler.parse("h"), Some(PlayerInput::Move(Move::Left)));

        let handler = InputHandler::with_vi_keys(false);
        assert_eq!(handler.parse("h"), None);
        assert_eq!(handler.parse("d"), Some(PlayerInput::Move(Move::Right)));
    }

    #[test]
    fn test_control_commands() {
        let handler = InputHandler::default();
        assert_eq!(handler.parse("n"), Some(PlayerInput::NewGame));
        assert_eq!(handler.parse("?"), Some(PlayerInput::Help));
        assert_eq!(handler.parse("exit"), Some(PlayerInput::Quit));
        assert_eq!(handler.parse("jump"), None);
    }
}

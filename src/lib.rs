//! # Twenty48
//!
//! Sliding-tile board engine for a 2048-style puzzle.
//!
//! ## Architecture Overview
//!
//! The engine is a set of pure functions over immutable board snapshots, with
//! randomness pushed to the edges:
//!
//! - **Board**: tiles, positions, the position codec and the matrix projection
//! - **Line Mover / Transition Engine**: slide and merge every row or column
//! - **Generation**: random tile spawning behind injectable capabilities
//! - **Game**: turn management that spawns a tile after each effective move
//! - **Input / Rendering**: the terminal front end's text commands and views
//!
//! Callers thread the board returned by one move into the next; the engine
//! keeps no shared board of its own.

pub mod board;
pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;

// Core module re-exports
pub use board::*;
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;

/// Core error type for the board engine and its front end.
#[derive(thiserror::Error, Debug)]
pub enum Twenty48Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Command cannot be performed
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Position key could not be decoded
    #[error("Invalid position key: {0:?}")]
    InvalidPositionKey(String),

    /// No free cell left to spawn a tile into
    #[error("Board is full")]
    BoardFull,

    /// A board broke the one-tile-per-cell or bounds invariant
    #[error("Board invariant violated: {0}")]
    InvariantViolated(String),
}

/// Result type used throughout the crate.
pub type Twenty48Result<T> = Result<T, Twenty48Error>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Board configuration constants.
pub mod config {
    /// Number of cells in a row (range of `x`)
    pub const ROW_LENGTH: usize = 4;

    /// Number of cells in a column (range of `y`)
    pub const COLUMN_LENGTH: usize = 4;

    /// Value of every newly spawned tile
    pub const INITIAL_TILE_VALUE: u32 = 2;

    /// Separator between `x` and `y` in position keys
    pub const TILE_POSITION_SEPARATOR: char = '-';

    /// Display colors per tile tier, starting at value 2
    pub const TILE_COLORS: [&str; 11] = [
        "#f0e9de", "#efe3cf", "#f4b27a", "#f99663", "#f87e5e", "#f75f40", "#f0d273", "#f0ce60",
        "#f1cd52", "#e7c257", "#e8be4e",
    ];
}

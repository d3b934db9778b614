//! # Game State Module
//!
//! Holds the current board snapshot and threads each move's result into the
//! next turn.

use super::TurnOutcome;
use crate::board::{apply_move, Board, Move};
use crate::generation::{GenerationConfig, IdGenerator, RandomSource, TileSpawner, UuidGenerator};
use crate::{Twenty48Error, Twenty48Result};
use rand::rngs::StdRng;

/// A single-player game session.
///
/// The board is only ever replaced, never edited: each turn computes the next
/// board from the current one and swaps it in.
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng, G = UuidGenerator> {
    board: Board,
    spawner: TileSpawner<R, G>,
    /// Number of moves that changed the board
    pub turn_number: u64,
}

impl GameState {
    /// Starts a new game using the production spawner.
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48::{GameState, GenerationConfig};
    ///
    /// let game = GameState::new(&GenerationConfig::for_testing(42)).unwrap();
    /// assert_eq!(game.board().len(), 2);
    /// assert_eq!(game.turn_number, 0);
    /// ```
    pub fn new(config: &GenerationConfig) -> Twenty48Result<Self> {
        Self::with_spawner(TileSpawner::from_config(config))
    }
}

impl<R: RandomSource, G: IdGenerator> GameState<R, G> {
    /// Starts a new game with an explicit spawner.
    pub fn with_spawner(mut spawner: TileSpawner<R, G>) -> Twenty48Result<Self> {
        let board = spawner.initial_board()?;
        Ok(Self {
            board,
            spawner,
            turn_number: 0,
        })
    }

    /// Resumes from an existing board snapshot.
    pub fn from_board(board: Board, spawner: TileSpawner<R, G>) -> Twenty48Result<Self> {
        board.validate()?;
        Ok(Self {
            board,
            spawner,
            turn_number: 0,
        })
    }

    /// The current board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs one turn: move, then spawn if the move changed anything.
    pub fn apply_move(&mut self, mv: Move) -> Twenty48Result<TurnOutcome> {
        let moved = apply_move(&self.board, mv);
        debug_assert!(moved.validate().is_ok(), "move produced an invalid board");

        if moved.same_layout(&self.board) {
            log::debug!("{:?} left the board unchanged", mv);
            return Ok(TurnOutcome::Unchanged);
        }

        let next = self.spawner.insert_one(&moved)?;
        let spawned = *next
            .tiles()
            .last()
            .ok_or_else(|| Twenty48Error::InvalidState("spawn produced no tile".to_string()))?;

        self.board = next;
        self.turn_number += 1;
        log::debug!(
            "turn {}: {:?}, {} tiles on board",
            self.turn_number,
            mv,
            self.board.len()
        );

        Ok(TurnOutcome::Moved { spawned })
    }

    /// Returns true if at least one move would change the board.
    pub fn has_moves(&self) -> bool {
        Move::all()
            .into_iter()
            .any(|mv| !apply_move(&self.board, mv).same_layout(&self.board))
    }

    /// Largest tile value on the board.
    pub fn highest_tile(&self) -> u32 {
        self.board
            .tiles()
            .iter()
            .map(|tile| tile.value)
            .max()
            .unwrap_or(0)
    }

    /// Discards the current board and deals a fresh opening board.
    pub fn new_game(&mut self) -> Twenty48Result<()> {
        self.board = self.spawner.initial_board()?;
        self.turn_number = 0;
        log::info!("started a new game");
        Ok(())
    }
}

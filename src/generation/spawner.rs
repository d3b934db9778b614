//! # Tile Spawner
//!
//! Places new starting-value tiles on uniformly chosen free cells.

use super::{create_rng, GenerationConfig, IdGenerator, RandomSource, UuidGenerator};
use crate::board::{all_keys, key_to_position, Board, Tile};
use crate::{Twenty48Error, Twenty48Result};
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Spawns tiles using injected randomness and identity sources.
#[derive(Debug, Clone)]
pub struct TileSpawner<R, G> {
    rng: R,
    ids: G,
    tile_value: u32,
}

impl TileSpawner<StdRng, UuidGenerator> {
    /// Creates the production spawner: seeded or entropy-backed `StdRng` plus
    /// random UUIDs.
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::with_value(create_rng(config), UuidGenerator, config.initial_tile_value)
    }
}

impl<R: RandomSource, G: IdGenerator> TileSpawner<R, G> {
    /// Creates a spawner that produces tiles of the default starting value.
    pub fn new(rng: R, ids: G) -> Self {
        Self::with_value(rng, ids, crate::config::INITIAL_TILE_VALUE)
    }

    /// Creates a spawner that produces tiles of `tile_value`.
    pub fn with_value(rng: R, ids: G, tile_value: u32) -> Self {
        Self {
            rng,
            ids,
            tile_value,
        }
    }

    /// Value every spawned tile starts with.
    pub fn tile_value(&self) -> u32 {
        self.tile_value
    }

    /// Builds the opening board: two tiles on two distinct random cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48::{FixedChoices, SequentialIds, TileSpawner};
    ///
    /// let mut spawner = TileSpawner::new(FixedChoices::new([0, 0]), SequentialIds::new());
    /// let board = spawner.initial_board().unwrap();
    ///
    /// assert_eq!(board.len(), 2);
    /// assert!(board.validate().is_ok());
    /// ```
    pub fn initial_board(&mut self) -> Twenty48Result<Board> {
        let board = self.insert_one(&Board::new())?;
        let board = self.insert_one(&board)?;
        log::debug!("initial board with {} tiles", board.len());
        Ok(board)
    }

    /// Returns `board` plus one new tile on a uniformly chosen free cell.
    ///
    /// A full board has nowhere to spawn and yields
    /// [`Twenty48Error::BoardFull`].
    pub fn insert_one(&mut self, board: &Board) -> Twenty48Result<Board> {
        let occupied = board.occupied_keys();
        let key = self.pick_free_key(&occupied).ok_or(Twenty48Error::BoardFull)?;
        let position = key_to_position(&key)?;

        let tile = Tile::new(self.ids.next_id(), self.tile_value, position);
        log::debug!("spawned {} at {}", tile.value, key);

        Ok(board.with_tile(tile))
    }

    fn pick_free_key(&mut self, occupied: &HashSet<String>) -> Option<String> {
        let mut free: Vec<String> = all_keys()
            .into_iter()
            .filter(|key| !occupied.contains(key))
            .collect();

        if free.is_empty() {
            log::warn!("no free cell to spawn into");
            return None;
        }

        let index = self.rng.pick_index(free.len());
        Some(free.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COLUMN_LENGTH, INITIAL_TILE_VALUE, ROW_LENGTH};
    use crate::{position_to_key, FixedChoices, Position, SequentialIds};
    use uuid::Uuid;

    fn full_board_except(hole: Position) -> Board {
        let mut tiles = Vec::new();
        let mut n = 100;
        for x in 0..ROW_LENGTH {
            for y in 0..COLUMN_LENGTH {
                let position = Position::new(x, y);
                if position != hole {
                    n += 1;
                    tiles.push(Tile::new(Uuid::from_u128(n), 2u32 << (n % 5) as u32, position));
                }
            }
        }
        Board::from_tiles(tiles)
    }

    #[test]
    fn test_initial_board_has_two_distinct_tiles() {
        for seed in 0..50 {
            let mut spawner = TileSpawner::from_config(&GenerationConfig::for_testing(seed));
            let board = spawner.initial_board().unwrap();

            assert_eq!(board.len(), 2);
            assert!(board.validate().is_ok());
            assert!(board.tiles().iter().all(|tile| tile.value == INITIAL_TILE_VALUE));
            assert_ne!(board.tiles()[0].id, board.tiles()[1].id);
        }
    }

    #[test]
    fn test_initial_board_draws_second_cell_from_remaining() {
        let mut spawner = TileSpawner::new(FixedChoices::new([0, 0]), SequentialIds::new());
        let board = spawner.initial_board().unwrap();

        let keys: Vec<_> = board
            .tiles()
            .iter()
            .map(|tile| position_to_key(tile.position))
            .collect();
        assert_eq!(keys[0], "0-0");
        assert_ne!(keys[0], keys[1]);
    }

    #[test]
    fn test_insert_one_fills_only_free_cell() {
        let hole = Position::new(2, 1);
        let board = full_board_except(hole);

        for pick in 0..10 {
            let mut spawner = TileSpawner::new(FixedChoices::new([pick]), SequentialIds::new());
            let next = spawner.insert_one(&board).unwrap();

            assert_eq!(next.len(), board.len() + 1);
            let spawned = next.tile_at(hole).unwrap();
            assert_eq!(spawned.value, INITIAL_TILE_VALUE);
            assert_eq!(spawned.id, Uuid::from_u128(1));
        }
    }

    #[test]
    fn test_insert_one_into_full_board() {
        let board = full_board_except(Position::new(0, 0));
        let mut spawner = TileSpawner::new(FixedChoices::default(), SequentialIds::new());
        let full = spawner.insert_one(&board).unwrap();
        assert!(full.is_full());

        assert!(matches!(
            spawner.insert_one(&full),
            Err(Twenty48Error::BoardFull)
        ));
    }

    #[test]
    fn test_insert_one_keeps_input_board() {
        let mut spawner = TileSpawner::new(FixedChoices::new([3]), SequentialIds::new());
        let board = spawner.initial_board().unwrap();
        let next = spawner.insert_one(&board).unwrap();

        assert_eq!(board.len(), 2);
        assert_eq!(next.len(), 3);
        for tile in board.tiles() {
            assert_eq!(next.get(tile.id), Some(tile));
        }
        assert!(next.validate().is_ok());
    }

    #[test]
    fn test_custom_tile_value() {
        let mut spawner = TileSpawner::with_value(FixedChoices::default(), SequentialIds::new(), 4);
        let board = spawner.insert_one(&Board::new()).unwrap();
        assert_eq!(board.tiles()[0].value, 4);
        assert_eq!(spawner.tile_value(), 4);
    }
}

//! # Randomness and Identity Sources
//!
//! Production and test implementations of [`RandomSource`] and [`IdGenerator`].

use super::{IdGenerator, RandomSource};
use crate::TileId;
use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;
use std::collections::VecDeque;
use uuid::Uuid;

impl RandomSource for StdRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

impl RandomSource for ThreadRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Replays a fixed list of picks, each reduced modulo the candidate count.
///
/// Once the list runs out every pick is `0`.
///
/// # Examples
///
/// ```
/// use twenty48::{FixedChoices, RandomSource};
///
/// let mut source = FixedChoices::new(vec![5, 1]);
/// assert_eq!(source.pick_index(4), 1);
/// assert_eq!(source.pick_index(4), 1);
/// assert_eq!(source.pick_index(4), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedChoices {
    choices: VecDeque<usize>,
}

impl FixedChoices {
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }
}

impl RandomSource for FixedChoices {
    fn pick_index(&mut self, len: usize) -> usize {
        self.choices.pop_front().unwrap_or(0) % len
    }
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> TileId {
        Uuid::new_v4()
    }
}

/// Predictable ids `1, 2, 3, ...` encoded as UUIDs.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the sequence at `first`.
    pub fn starting_at(first: u128) -> Self {
        Self { next: first }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TileId {
        self.next += 1;
        Uuid::from_u128(self.next)
    }
}

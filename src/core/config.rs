//! Board configuration.
//!
//! A Kalah board is fully described by two numbers: how many small pits each
//! player owns and how many stones start in each of them. The store is always
//! one extra slot at the end of a row and starts empty.

use serde::{Deserialize, Serialize};

/// Small pits per player in the standard game.
pub const DEFAULT_PIT_COUNT: usize = 6;

/// Stones per small pit at the start of the standard game.
pub const DEFAULT_STARTING_STONES: u32 = 3;

/// Configuration for a fresh board.
///
/// `pit_count` excludes the store. A `pit_count` of zero is accepted and
/// yields rows that consist of a store only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of playable pits per row.
    pub pit_count: usize,

    /// Stones placed in every playable pit.
    pub starting_stones: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            pit_count: DEFAULT_PIT_COUNT,
            starting_stones: DEFAULT_STARTING_STONES,
        }
    }
}

impl BoardConfig {
    /// Create a configuration with explicit values.
    #[must_use]
    pub const fn new(pit_count: usize, starting_stones: u32) -> Self {
        Self {
            pit_count,
            starting_stones,
        }
    }

    /// Set the number of playable pits per row.
    #[must_use]
    pub fn with_pit_count(mut self, pit_count: usize) -> Self {
        self.pit_count = pit_count;
        self
    }

    /// Set the starting stones per pit.
    #[must_use]
    pub fn with_starting_stones(mut self, stones: u32) -> Self {
        self.starting_stones = stones;
        self
    }

    /// Length of each row, store included.
    #[must_use]
    pub const fn row_len(&self) -> usize {
        self.pit_count + 1
    }

    /// Stones on the whole board at the start of a match.
    #[must_use]
    pub fn total_stones(&self) -> u64 {
        2 * self.pit_count as u64 * u64::from(self.starting_stones)
    }
}

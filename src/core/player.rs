//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! One of the two seats at the board. Seat 0 moves first by convention,
//! but nothing in the engine depends on that.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`. The important operation is
//! [`PlayerPair::split_active`], which hands out the active player's entry
//! and the opponent's entry as two disjoint mutable borrows.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::BoardError;

/// Number of seats at a Kalah board.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier for a two-player board.
///
/// Player indices are 0-based: the first player is `PlayerId::new(0)`.
/// Only 0 and 1 can be constructed, so the raw field stays private:
///
/// ```compile_fail
/// use kalah_engine::core::PlayerId;
///
/// let nobody = PlayerId(2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player seated on the first row.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The player seated on the second row.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < PLAYER_COUNT as u8, "Kalah has exactly 2 players");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player sitting across the board.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both player IDs.
    ///
    /// ```
    /// use kalah_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = BoardError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if usize::from(id) < PLAYER_COUNT {
            Ok(Self(id))
        } else {
            Err(BoardError::InvalidPlayer(id))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use kalah_engine::core::{PlayerId, PlayerPair};
///
/// let mut stores: PlayerPair<u32> = PlayerPair::with_value(0);
/// stores[PlayerId::SECOND] = 7;
///
/// let (active, opponent) = stores.split_active(PlayerId::SECOND);
/// assert_eq!((*active, *opponent), (7, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a pair from explicit values, first player first.
    pub fn from_values(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_values(value.clone(), value)
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow `active`'s entry and its opponent's entry mutably at once.
    pub fn split_active(&mut self, active: PlayerId) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        if active == PlayerId::FIRST {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Consume the pair, returning the first player's value first.
    pub fn into_values(self) -> (T, T) {
        let [first, second] = self.data;
        (first, second)
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

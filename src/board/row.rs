//! One player's side of the board.
//!
//! A `Row` holds `N + 1` stone counts: indices `0..N` are the small pits a
//! player may move from, index `N` is their store. Rows live in a
//! `SmallVec` so standard boards (up to seven pits) never touch the heap.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Stone counts for one player's pits followed by their store.
///
/// Each slot is a `u32`. A move can gather every stone on the board into
/// one store, so the engine only plays boards holding at most
/// [`MAX_TOTAL_STONES`] in total.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    slots: SmallVec<[u32; 8]>,
}

/// The pit across the board from `pit`, for rows with `pit_count` small pits.
///
/// Pit `i` on one row faces pit `pit_count - 1 - i` on the other, whichever
/// row is active. The relation is its own inverse.
#[inline]
#[must_use]
pub const fn opposite_index(pit_count: usize, pit: usize) -> usize {
    pit_count - 1 - pit
}

/// Most stones a board may hold: every one of them must fit in a single store.
pub const MAX_TOTAL_STONES: u64 = u32::MAX as u64;

impl Row {
    /// A row of `pit_count` pits holding `stones` each, with an empty store.
    #[must_use]
    pub fn filled(pit_count: usize, stones: u32) -> Self {
        let mut slots: SmallVec<[u32; 8]> = SmallVec::from_elem(stones, pit_count);
        slots.push(0);
        Self { slots }
    }

    /// Build a row from raw slot values, store last.
    #[must_use]
    pub fn from_slice(slots: &[u32]) -> Self {
        Self {
            slots: SmallVec::from_slice(slots),
        }
    }

    /// Total slots, store included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for a row with no slots at all (not even a store).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of playable pits.
    #[must_use]
    pub fn pit_count(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    /// Index of the store slot.
    ///
    /// Panics on an empty row.
    #[must_use]
    pub fn store_index(&self) -> usize {
        assert!(!self.slots.is_empty(), "row has no store slot");
        self.slots.len() - 1
    }

    /// Stones banked in the store.
    #[must_use]
    pub fn store(&self) -> u32 {
        self.slots.last().copied().unwrap_or(0)
    }

    /// The playable pits, store excluded.
    #[must_use]
    pub fn pits(&self) -> &[u32] {
        &self.slots[..self.pit_count()]
    }

    /// All slots, store last.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [u32] {
        &mut self.slots
    }

    /// Stones in this row, store included.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.slots.iter().map(|&s| u64::from(s)).sum()
    }

    /// Stones still in play on this row (store excluded).
    #[must_use]
    pub fn stones_in_pits(&self) -> u64 {
        self.pits().iter().map(|&s| u64::from(s)).sum()
    }

    /// The pit across the board from `pit`.
    ///
    /// Only meaningful for `pit < self.pit_count()`.
    #[must_use]
    pub fn opposite(&self, pit: usize) -> usize {
        opposite_index(self.pit_count(), pit)
    }

    /// Whether `pit` is a non-empty playable pit.
    #[must_use]
    pub fn is_legal(&self, pit: usize) -> bool {
        pit < self.pit_count() && self.slots[pit] > 0
    }

    /// Indices of every pit the owner could move from.
    pub fn legal_pits(&self) -> impl Iterator<Item = usize> + '_ {
        self.pits()
            .iter()
            .enumerate()
            .filter(|&(_, &stones)| stones > 0)
            .map(|(pit, _)| pit)
    }

    /// Whether the owner has any legal move.
    ///
    /// A player without one ends the round; settling the remaining stones is
    /// left to the caller.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.pits().iter().any(|&stones| stones > 0)
    }
}

impl Index<usize> for Row {
    type Output = u32;

    fn index(&self, slot: usize) -> &Self::Output {
        &self.slots[slot]
    }
}

impl IndexMut<usize> for Row {
    fn index_mut(&mut self, slot: usize) -> &mut Self::Output {
        &mut self.slots[slot]
    }
}

impl From<Vec<u32>> for Row {
    fn from(slots: Vec<u32>) -> Self {
        Self {
            slots: SmallVec::from_vec(slots),
        }
    }
}

impl<const N: usize> From<[u32; N]> for Row {
    fn from(slots: [u32; N]) -> Self {
        Self::from_slice(&slots)
    }
}

impl From<Row> for Vec<u32> {
    fn from(row: Row) -> Self {
        row.slots.into_vec()
    }
}

impl<const N: usize> PartialEq<[u32; N]> for Row {
    fn eq(&self, other: &[u32; N]) -> bool {
        self.slots.as_slice() == other.as_slice()
    }
}

impl PartialEq<[u32]> for Row {
    fn eq(&self, other: &[u32]) -> bool {
        self.slots.as_slice() == other
    }
}

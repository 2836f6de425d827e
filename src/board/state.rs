//! Both rows of a board, addressed by player.
//!
//! `Board` owns the two rows and guarantees they have the same length, so
//! moves through it never hit the engine's length assertion. It does not
//! track whose turn it is; callers feed the returned outcome into their own
//! turn sequencing.

use serde::{Deserialize, Serialize};

use super::factory::initialize_with;
use super::{Row, MAX_TOTAL_STONES};
use crate::core::{BoardConfig, GameRng, PlayerId, PlayerPair};
use crate::error::BoardError;
use crate::rules::{apply_move_at, apply_move_detailed, MoveOutcome, MoveReport};

/// Two equal-length rows, first player's row first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedBoard")]
pub struct Board {
    rows: PlayerPair<Row>,
}

/// Wire shape of a `Board` before the row lengths are checked.
#[derive(Deserialize)]
struct UncheckedBoard {
    rows: PlayerPair<Row>,
}

impl TryFrom<UncheckedBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: UncheckedBoard) -> Result<Self, Self::Error> {
        let (first, second) = raw.rows.into_values();
        Board::from_rows(first, second)
    }
}

impl Board {
    /// A fresh board for `config`.
    ///
    /// Panics if the configuration puts more than [`MAX_TOTAL_STONES`] on the
    /// board; see [`Board::try_new`].
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        let total = config.total_stones();
        assert!(
            total <= MAX_TOTAL_STONES,
            "board holds {} stones, more than one store can bank",
            total
        );
        let (first, second) = initialize_with(config);
        Self {
            rows: PlayerPair::from_values(first, second),
        }
    }

    /// A fresh board for `config`, refusing oversized configurations.
    pub fn try_new(config: &BoardConfig) -> Result<Self, BoardError> {
        let total = config.total_stones();
        if total > MAX_TOTAL_STONES {
            return Err(BoardError::TooManyStones { total });
        }
        Ok(Self::new(config))
    }

    /// Pair two existing rows, first player's row first.
    pub fn from_rows(first: Row, second: Row) -> Result<Self, BoardError> {
        if first.is_empty() || second.is_empty() {
            return Err(BoardError::MissingStore);
        }
        if first.len() != second.len() {
            return Err(BoardError::MismatchedRows {
                first: first.len(),
                second: second.len(),
            });
        }
        let total = first.total() + second.total();
        if total > MAX_TOTAL_STONES {
            return Err(BoardError::TooManyStones { total });
        }
        Ok(Self {
            rows: PlayerPair::from_values(first, second),
        })
    }

    /// A player's row.
    #[must_use]
    pub fn row(&self, player: PlayerId) -> &Row {
        &self.rows[player]
    }

    /// Playable pits per row.
    #[must_use]
    pub fn pit_count(&self) -> usize {
        self.rows[PlayerId::FIRST].pit_count()
    }

    /// Stones in a player's store.
    #[must_use]
    pub fn store(&self, player: PlayerId) -> u32 {
        self.rows[player].store()
    }

    /// Stones on the whole board. Constant across moves.
    #[must_use]
    pub fn total_stones(&self) -> u64 {
        self.rows.iter().map(|(_, row)| row.total()).sum()
    }

    /// Whether `player` can move at all.
    #[must_use]
    pub fn has_legal_move(&self, player: PlayerId) -> bool {
        self.rows[player].has_legal_move()
    }

    /// Pits `player` may move from.
    pub fn legal_pits(&self, player: PlayerId) -> impl Iterator<Item = usize> + '_ {
        self.rows[player].legal_pits()
    }

    /// Uniformly random legal pit for `player`, or `None` if they are stuck.
    pub fn random_legal_pit(&self, player: PlayerId, rng: &mut GameRng) -> Option<usize> {
        let pits: Vec<usize> = self.legal_pits(player).collect();
        rng.choose(&pits).copied()
    }

    /// Play `pit` for `player`.
    pub fn apply_move(&mut self, player: PlayerId, pit: usize) -> MoveOutcome {
        self.apply_move_detailed(player, pit).outcome
    }

    /// Play a signed `position` for `player`; negatives are invalid positions.
    pub fn apply_move_at(&mut self, player: PlayerId, position: i64) -> MoveOutcome {
        let (active, opponent) = self.rows.split_active(player);
        apply_move_at(active, opponent, position)
    }

    /// Play `pit` for `player`, reporting where the stones went.
    pub fn apply_move_detailed(&mut self, player: PlayerId, pit: usize) -> MoveReport {
        let (active, opponent) = self.rows.split_active(player);
        let report = apply_move_detailed(active, opponent, pit);
        log::trace!("{} played pit {}: {}", player, pit, report.outcome);
        report
    }

    /// Give the rows back, first player's row first.
    #[must_use]
    pub fn into_rows(self) -> (Row, Row) {
        self.rows.into_values()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

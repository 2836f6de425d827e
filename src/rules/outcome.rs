//! What a move did.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of asking the engine to play a pit.
///
/// The two rejections leave the board untouched. The two accepted outcomes
/// tell the caller who moves next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The index is not a playable pit (out of range, or the store).
    InvalidPosition,
    /// The chosen pit holds no stones.
    EmptyPosition,
    /// The last stone landed anywhere but the mover's store, capture included.
    RoundOver,
    /// The last stone landed in the mover's store; they move again.
    PlayAgain,
}

impl MoveOutcome {
    /// Integer code used by the scripting bindings.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            MoveOutcome::InvalidPosition => 0,
            MoveOutcome::EmptyPosition => 1,
            MoveOutcome::RoundOver => 2,
            MoveOutcome::PlayAgain => 3,
        }
    }

    /// Inverse of [`code`](Self::code).
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MoveOutcome::InvalidPosition),
            1 => Some(MoveOutcome::EmptyPosition),
            2 => Some(MoveOutcome::RoundOver),
            3 => Some(MoveOutcome::PlayAgain),
            _ => None,
        }
    }

    /// True if the move was refused and nothing changed.
    #[must_use]
    pub const fn is_rejected(self) -> bool {
        matches!(self, MoveOutcome::InvalidPosition | MoveOutcome::EmptyPosition)
    }

    /// True if the move was played and the board changed.
    #[must_use]
    pub const fn mutated_board(self) -> bool {
        !self.is_rejected()
    }

    /// Who acts after `mover` received this outcome.
    ///
    /// Only `RoundOver` passes the turn. A rejected move is retried by the
    /// same player.
    #[must_use]
    pub const fn next_player(self, mover: PlayerId) -> PlayerId {
        match self {
            MoveOutcome::RoundOver => mover.opponent(),
            _ => mover,
        }
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MoveOutcome::InvalidPosition => "invalid position",
            MoveOutcome::EmptyPosition => "empty position",
            MoveOutcome::RoundOver => "round over",
            MoveOutcome::PlayAgain => "play again",
        };
        f.write_str(name)
    }
}

/// Where the last stone of a move ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landing {
    /// The mover's own store: a bonus turn.
    OwnStore,
    /// A pit on the mover's row that was already occupied, or whose
    /// opposite pit was empty.
    OwnPit(usize),
    /// A pit on the opponent's row.
    OpponentPit(usize),
    /// An empty pit on the mover's row facing a non-empty opponent pit.
    ///
    /// `captured` counts the opponent's stones only; the store also received
    /// the landing stone itself.
    Capture {
        pit: usize,
        opposite: usize,
        captured: u32,
    },
}

impl Landing {
    /// The outcome this landing produces.
    #[must_use]
    pub const fn outcome(self) -> MoveOutcome {
        match self {
            Landing::OwnStore => MoveOutcome::PlayAgain,
            _ => MoveOutcome::RoundOver,
        }
    }

    /// Stones the landing added to the mover's store.
    #[must_use]
    pub const fn banked(self) -> u32 {
        match self {
            Landing::OwnStore => 1,
            Landing::Capture { captured, .. } => captured + 1,
            Landing::OwnPit(_) | Landing::OpponentPit(_) => 0,
        }
    }
}

/// Full account of one call into the move engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveReport {
    pub outcome: MoveOutcome,

    /// Stones lifted from the chosen pit (0 when rejected).
    pub picked_up: u32,

    /// Lap boundaries crossed while sowing.
    pub laps: usize,

    /// `None` exactly when the move was rejected.
    pub landing: Option<Landing>,
}

impl MoveReport {
    /// Report for a move refused before any stone was lifted.
    #[must_use]
    pub const fn rejected(outcome: MoveOutcome) -> Self {
        Self {
            outcome,
            picked_up: 0,
            laps: 0,
            landing: None,
        }
    }

    /// Stones captured from the opponent, if the move ended in a capture.
    #[must_use]
    pub fn captured(&self) -> Option<u32> {
        match self.landing {
            Some(Landing::Capture { captured, .. }) => Some(captured),
            _ => None,
        }
    }
}

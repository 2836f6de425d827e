//! # kalah-engine
//!
//! Rule engine for a two-player Kalah-style stone-sowing game.
//!
//! ## Scope
//!
//! The engine does two things:
//!
//! 1. **Board setup**: `board::initialize` builds two rows of equal pits
//!    with an empty store at the end of each.
//! 2. **Move execution**: `rules::apply_move` sows the stones from one pit
//!    around the board. It skips the opponent's store, resolves captures,
//!    and reports whether the mover earned a bonus turn.
//!
//! Turn sequencing, end-of-round settlement and scoring belong to the
//! caller. The engine holds no state between calls, so separate matches can
//! run on separate threads without coordination.
//!
//! ## Layout
//!
//! ```text
//!  store   pits (second player, right to left)
//!  [ 0 ]  [5] [4] [3] [2] [1] [0]
//!         [0] [1] [2] [3] [4] [5]   [ 6 ]
//!          pits (first player)       store
//! ```
//!
//! Pit `i` on one row faces pit `N - 1 - i` on the other.
//!
//! ## Modules
//!
//! - `core`: Player IDs, per-player storage, configuration, RNG
//! - `board`: Rows, the board factory, the paired `Board`
//! - `rules`: Move engine, sowing state machine, outcomes
//! - `error`: Structural board errors
//! - `python` (feature `python`): PyO3 bindings

pub mod core;
pub mod board;
pub mod rules;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{BoardConfig, GameRng, PlayerId, PlayerPair};

pub use crate::board::{initialize, initialize_with, opposite_index, Board, Row, MAX_TOTAL_STONES};

pub use crate::rules::{apply_move, apply_move_at, apply_move_detailed, Landing, MoveOutcome, MoveReport};

pub use crate::error::BoardError;

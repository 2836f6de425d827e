//! Move rules: sowing, captures, and bonus turns.
//!
//! The engine applies exactly one move and reports what happened. Turn
//! order, end-of-round settlement and scoring belong to the caller, who
//! reads [`MoveOutcome`] to decide who moves next.

pub mod engine;
pub mod outcome;
pub mod sowing;

pub use engine::{apply_move, apply_move_at, apply_move_detailed};
pub use outcome::{Landing, MoveOutcome, MoveReport};
pub use sowing::{Lap, SowState, Step};

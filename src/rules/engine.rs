//! Move engine.
//!
//! Validates a requested pit, lifts its stones, and sows them. A move either
//! completes in full or is rejected with both rows untouched.

use crate::board::{Row, MAX_TOTAL_STONES};

use super::outcome::{Landing, MoveOutcome, MoveReport};
use super::sowing::sow;

/// Play `pit` from the `active` row against `opponent`.
///
/// Both rows are mutated in place. The active player's row comes first;
/// the caller swaps the arguments when the turn passes.
///
/// Panics if the rows differ in length, or if an accepted move is asked of
/// rows holding more than [`MAX_TOTAL_STONES`] between them. Both are caller
/// contract violations, caught before either row is touched; use
/// [`Board`](crate::board::Board) for a checked pairing.
///
/// ```
/// use kalah_engine::board::Row;
/// use kalah_engine::rules::{apply_move, MoveOutcome};
///
/// let mut active = Row::from([3, 0, 6, 0]);
/// let mut opponent = Row::from([3, 3, 3, 0]);
///
/// assert_eq!(apply_move(&mut active, &mut opponent, 0), MoveOutcome::PlayAgain);
/// assert_eq!(active, [0, 1, 7, 1]);
/// ```
pub fn apply_move(active: &mut Row, opponent: &mut Row, pit: usize) -> MoveOutcome {
    apply_move_detailed(active, opponent, pit).outcome
}

/// Like [`apply_move`], for callers holding a signed pit index.
///
/// Negative indices are [`MoveOutcome::InvalidPosition`], never counted
/// from the end of the row.
pub fn apply_move_at(active: &mut Row, opponent: &mut Row, position: i64) -> MoveOutcome {
    match usize::try_from(position) {
        Ok(pit) => apply_move(active, opponent, pit),
        Err(_) => MoveOutcome::InvalidPosition,
    }
}

/// Same as [`apply_move`], also reporting how the stones travelled.
pub fn apply_move_detailed(active: &mut Row, opponent: &mut Row, pit: usize) -> MoveReport {
    assert_eq!(
        active.len(),
        opponent.len(),
        "active and opponent rows must have the same length"
    );

    log::trace!("move requested: pit {} of {:?} against {:?}", pit, active, opponent);

    if pit >= active.pit_count() {
        log::debug!("rejected pit {}: only {} playable pits", pit, active.pit_count());
        return MoveReport::rejected(MoveOutcome::InvalidPosition);
    }

    if active[pit] == 0 {
        log::debug!("rejected pit {}: no stones", pit);
        return MoveReport::rejected(MoveOutcome::EmptyPosition);
    }

    let total = active.total() + opponent.total();
    assert!(
        total <= MAX_TOTAL_STONES,
        "rows hold {} stones, more than a store can bank",
        total
    );

    let hand = std::mem::take(&mut active[pit]);
    let (landing, laps) = sow(active.slots_mut(), opponent.slots_mut(), pit, hand);

    if let Landing::Capture { pit, opposite, captured } = landing {
        log::debug!("capture at pit {}: took {} stones from opposite pit {}", pit, captured, opposite);
    }

    let report = MoveReport {
        outcome: landing.outcome(),
        picked_up: hand,
        laps,
        landing: Some(landing),
    };
    log::trace!("move finished: {:?}", report);
    report
}

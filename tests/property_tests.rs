//! Property tests for the move engine.
//!
//! Random rows of random width, random pit choices (including out-of-range
//! ones), checked against the invariants every move must keep.

use kalah_engine::board::{opposite_index, Row};
use kalah_engine::rules::{apply_move_detailed, Landing, MoveOutcome};
use proptest::prelude::*;

/// Two equal-length rows with 1-8 pits and a pit index that may be invalid.
fn position() -> impl Strategy<Value = (Row, Row, usize)> {
    (1usize..=8).prop_flat_map(|pits| {
        (
            prop::collection::vec(0u32..12, pits + 1),
            prop::collection::vec(0u32..12, pits + 1),
            0..pits + 3,
        )
            .prop_map(|(a, b, pit)| (Row::from(a), Row::from(b), pit))
    })
}

/// Which row and slot the `hand`-th stone lands on, ignoring captures.
///
/// Walks the sowing path directly: own slots after `pit` (store included),
/// opponent pits, own slots from 0, and so on.
fn last_destination(pit_count: usize, pit: usize, hand: u32) -> (bool, usize) {
    let mut own = true;
    let mut slot = pit;
    let mut left = hand;
    loop {
        slot += 1;
        let row_end = if own { pit_count + 1 } else { pit_count };
        if slot >= row_end {
            own = !own;
            slot = 0;
        }
        left -= 1;
        if left == 0 {
            return (own, slot);
        }
    }
}

proptest! {
    /// Stones are only moved, never created or destroyed.
    #[test]
    fn prop_conservation((mut active, mut opponent, pit) in position()) {
        let before = active.total() + opponent.total();
        apply_move_detailed(&mut active, &mut opponent, pit);
        prop_assert_eq!(active.total() + opponent.total(), before);
    }

    /// Rejected moves leave both rows exactly as they were.
    #[test]
    fn prop_rejection_is_side_effect_free((mut active, mut opponent, pit) in position()) {
        let (a0, o0) = (active.clone(), opponent.clone());
        let report = apply_move_detailed(&mut active, &mut opponent, pit);

        if report.outcome.is_rejected() {
            prop_assert_eq!(active, a0);
            prop_assert_eq!(opponent, o0);
            prop_assert!(report.landing.is_none());
        } else {
            prop_assert!(pit < a0.pit_count());
            prop_assert!(a0[pit] > 0);
        }
    }

    /// Validation follows the two rejection rules exactly.
    #[test]
    fn prop_rejection_reasons((mut active, mut opponent, pit) in position()) {
        let pit_count = active.pit_count();
        let held = if pit < pit_count { active[pit] } else { 0 };
        let outcome = apply_move_detailed(&mut active, &mut opponent, pit).outcome;

        if pit >= pit_count {
            prop_assert_eq!(outcome, MoveOutcome::InvalidPosition);
        } else if held == 0 {
            prop_assert_eq!(outcome, MoveOutcome::EmptyPosition);
        } else {
            prop_assert!(outcome == MoveOutcome::PlayAgain || outcome == MoveOutcome::RoundOver);
        }
    }

    /// Neither store ever loses stones; the opponent's store never gains any.
    #[test]
    fn prop_store_monotonicity((mut active, mut opponent, pit) in position()) {
        let (own_before, their_before) = (active.store(), opponent.store());
        apply_move_detailed(&mut active, &mut opponent, pit);

        prop_assert!(active.store() >= own_before);
        prop_assert_eq!(opponent.store(), their_before);
    }

    /// The bonus turn happens exactly when the path ends on the mover's store.
    #[test]
    fn prop_bonus_turn((mut active, mut opponent, pit) in position()) {
        let pit_count = active.pit_count();
        prop_assume!(pit < pit_count && active[pit] > 0);
        let hand = active[pit];

        let report = apply_move_detailed(&mut active, &mut opponent, pit);
        let (own, slot) = last_destination(pit_count, pit, hand);
        let ends_in_store = own && slot == pit_count;

        prop_assert_eq!(report.outcome == MoveOutcome::PlayAgain, ends_in_store);
        prop_assert_eq!(report.landing == Some(Landing::OwnStore), ends_in_store);
        if !own {
            prop_assert_eq!(report.landing, Some(Landing::OpponentPit(slot)));
        }
    }

    /// Captures take the mirrored pit and bank it plus the landing stone.
    #[test]
    fn prop_capture((mut active, mut opponent, pit) in position()) {
        let pit_count = active.pit_count();
        prop_assume!(pit < pit_count && active[pit] > 0);
        let opponent_before = opponent.clone();
        let store_before = active.store();
        let hand = active[pit];

        let report = apply_move_detailed(&mut active, &mut opponent, pit);

        if let Some(Landing::Capture { pit: landed, opposite, captured }) = report.landing {
            prop_assert_eq!(opposite, opposite_index(pit_count, landed));
            prop_assert_eq!(opponent[opposite], 0);
            prop_assert_eq!(active[landed], 0);
            prop_assert!(captured >= opponent_before[opposite]);
            prop_assert!(captured > 0);
            prop_assert!(active.store() >= store_before + captured + 1);

            // A sow that never leaves the mover's pits banks exactly the capture.
            if (hand as usize) < pit_count - pit {
                prop_assert_eq!(captured, opponent_before[opposite]);
                prop_assert_eq!(active.store(), store_before + captured + 1);
            }
        }
    }

    /// The opposite relation is its own inverse for every pit.
    #[test]
    fn prop_opposite_involution(pit_count in 1usize..64, raw in 0usize..64) {
        let pit = raw % pit_count;
        let there = opposite_index(pit_count, pit);
        prop_assert!(there < pit_count);
        prop_assert_eq!(opposite_index(pit_count, there), pit);
    }
}

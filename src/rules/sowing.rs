//! Sowing state machine.
//!
//! Sowing walks the board in laps: the rest of the mover's row (their store
//! included), then the opponent's pits (their store skipped), then the
//! mover's row from pit 0, and so on. The walk is an explicit
//! [`SowState`] advanced one slot at a time by [`SowState::step`], which
//! mutates the two rows and reports what it did.
//!
//! Callers validate the move and lift the stones before sowing starts; the
//! state machine assumes at least one stone in hand and rows of equal length
//! with at least one pit.

use crate::board::opposite_index;

use super::outcome::Landing;

/// Which row the cursor is walking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lap {
    /// The mover's row, store included.
    Own,
    /// The opponent's row, store excluded.
    Opponent,
}

impl Lap {
    /// The row visited after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Lap::Own => Lap::Opponent,
            Lap::Opponent => Lap::Own,
        }
    }
}

/// What a single [`SowState::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Dropped one stone and kept going.
    Sowed,
    /// Reached the end of a row (or the opponent's store) and switched rows.
    LapEnd,
    /// Placed the last stone. Sowing is finished.
    Landed(Landing),
}

/// Explicit sowing state: current row, next slot, stones left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SowState {
    pub lap: Lap,
    pub cursor: usize,
    pub hand: u32,
    /// Lap boundaries crossed so far.
    pub laps: usize,
}

impl SowState {
    /// State right after lifting `hand` stones out of the mover's `pit`.
    #[must_use]
    pub const fn start(pit: usize, hand: u32) -> Self {
        Self {
            lap: Lap::Own,
            cursor: pit + 1,
            hand,
            laps: 0,
        }
    }

    /// True once the last stone has been placed.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.hand == 0
    }

    /// Advance by one slot.
    pub fn step(&mut self, active: &mut [u32], opponent: &mut [u32]) -> Step {
        debug_assert!(self.hand > 0, "step called after the last stone landed");

        let row_len = active.len();
        let store = row_len - 1;

        if self.cursor == row_len || (self.lap == Lap::Opponent && self.cursor == store) {
            self.lap = self.lap.next();
            self.cursor = 0;
            self.laps += 1;
            return Step::LapEnd;
        }

        if self.hand > 1 {
            let row = match self.lap {
                Lap::Own => &mut *active,
                Lap::Opponent => &mut *opponent,
            };
            row[self.cursor] += 1;
            self.hand -= 1;
            self.cursor += 1;
            return Step::Sowed;
        }

        self.hand = 0;
        let pit = self.cursor;

        let landing = match self.lap {
            Lap::Opponent => {
                opponent[pit] += 1;
                Landing::OpponentPit(pit)
            }
            Lap::Own if pit == store => {
                active[store] += 1;
                Landing::OwnStore
            }
            Lap::Own => {
                // The store index equals the pit count.
                let opposite = opposite_index(store, pit);
                if active[pit] == 0 && opponent[opposite] > 0 {
                    let captured = std::mem::take(&mut opponent[opposite]);
                    active[store] += captured + 1;
                    Landing::Capture {
                        pit,
                        opposite,
                        captured,
                    }
                } else {
                    active[pit] += 1;
                    Landing::OwnPit(pit)
                }
            }
        };

        Step::Landed(landing)
    }
}

/// Sow `hand` stones starting after the mover's `pit` until the last lands.
///
/// Returns the landing and the number of lap boundaries crossed.
pub fn sow(active: &mut [u32], opponent: &mut [u32], pit: usize, hand: u32) -> (Landing, usize) {
    let mut state = SowState::start(pit, hand);
    loop {
        if let Step::Landed(landing) = state.step(active, opponent) {
            return (landing, state.laps);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lap_next() {
        assert_eq!(Lap::Own.next(), Lap::Opponent);
        assert_eq!(Lap::Opponent.next(), Lap::Own);
    }

    #[test]
    fn test_step_sequence_into_store() {
        // Picked up 3 from pit 0 of [_, 0, 6, 0].
        let mut active = [0, 0, 6, 0];
        let mut opponent = [3, 3, 3, 0];
        let mut state = SowState::start(0, 3);

        assert_eq!(state.step(&mut active, &mut opponent), Step::Sowed);
        assert_eq!(state.step(&mut active, &mut opponent), Step::Sowed);
        assert_eq!(
            state.step(&mut active, &mut opponent),
            Step::Landed(Landing::OwnStore)
        );

        assert!(state.is_finished());
        assert_eq!(state.laps, 0);
        assert_eq!(active, [0, 1, 7, 1]);
        assert_eq!(opponent, [3, 3, 3, 0]);
    }

    #[test]
    fn test_opponent_store_is_skipped() {
        let mut active = [0, 0, 0, 0];
        let mut opponent = [0, 0, 0, 0];
        // Five stones lifted from the last pit.
        let mut state = SowState::start(2, 5);

        assert_eq!(state.step(&mut active, &mut opponent), Step::Sowed);
        assert_eq!(state.step(&mut active, &mut opponent), Step::LapEnd);
        assert_eq!(state.lap, Lap::Opponent);
        for _ in 0..3 {
            assert_eq!(state.step(&mut active, &mut opponent), Step::Sowed);
        }
        // Cursor now sits on the opponent's store.
        assert_eq!(state.cursor, 3);
        assert_eq!(state.step(&mut active, &mut opponent), Step::LapEnd);
        assert_eq!(state.lap, Lap::Own);
        assert_eq!(state.cursor, 0);
        assert_eq!(opponent[3], 0);
    }

    #[test]
    fn test_last_stone_on_opponent_row_never_captures() {
        // Opponent pit 0 is empty and faces a loaded pit 2.
        let mut active = [0, 0, 4, 0];
        let mut opponent = [0, 0, 0, 0];

        let (landing, laps) = sow(&mut active, &mut opponent, 1, 3);

        assert_eq!(landing, Landing::OpponentPit(0));
        assert_eq!(laps, 1);
        assert_eq!(active, [0, 0, 5, 1]);
        assert_eq!(opponent, [1, 0, 0, 0]);
    }

    #[test]
    fn test_capture_requires_stones_opposite() {
        let mut active = [0, 0, 0, 0];
        let mut opponent = [1, 1, 0, 0];

        // Pit 1 faces opponent pit 1; last stone lands in pit 2, facing pit 0.
        let (landing, _) = sow(&mut active, &mut opponent, 1, 1);
        assert_eq!(
            landing,
            Landing::Capture { pit: 2, opposite: 0, captured: 1 }
        );
        assert_eq!(active, [0, 0, 0, 2]);
        assert_eq!(opponent, [0, 1, 0, 0]);

        let mut active = [0, 0, 0, 0];
        let mut opponent = [0, 1, 0, 0];
        let (landing, _) = sow(&mut active, &mut opponent, 1, 1);
        assert_eq!(landing, Landing::OwnPit(2));
        assert_eq!(active, [0, 0, 1, 0]);
    }

    #[test]
    fn test_multi_lap_capture() {
        // [0, 4, 0] vs [0, 0, 0], four stones lifted from pit 1.
        let mut active = [0, 0, 0];
        let mut opponent = [0, 0, 0];

        let (landing, laps) = sow(&mut active, &mut opponent, 1, 4);

        assert_eq!(
            landing,
            Landing::Capture { pit: 0, opposite: 1, captured: 1 }
        );
        assert_eq!(laps, 2);
        assert_eq!(active, [0, 0, 3]);
        assert_eq!(opponent, [1, 0, 0]);
    }

    #[test]
    fn test_wraparound_onto_origin_pit() {
        // 7 stones from pit 0 of a 3-pit board come back around to pit 0,
        // which is now empty and faces opponent pit 2.
        let mut active = [0, 0, 0, 0];
        let mut opponent = [0, 0, 0, 0];

        let (landing, laps) = sow(&mut active, &mut opponent, 0, 7);

        // Own pits 1, 2, store; opponent 0..3; then own pit 0.
        assert_eq!(
            landing,
            Landing::Capture { pit: 0, opposite: 2, captured: 1 }
        );
        assert_eq!(laps, 2);
        assert_eq!(active, [0, 1, 1, 3]);
        assert_eq!(opponent, [1, 1, 0, 0]);
    }
}

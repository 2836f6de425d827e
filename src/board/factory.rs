//! Board factory: fresh rows for the start of a match.

use crate::core::BoardConfig;

use super::Row;

/// Build the two starting rows.
///
/// Each row has `pit_count` pits holding `starting_stones` and an empty
/// store. The rows are independent values.
///
/// ```
/// use kalah_engine::board::initialize;
///
/// let (first, second) = initialize(6, 3);
/// assert_eq!(first, [3, 3, 3, 3, 3, 3, 0]);
/// assert_eq!(second, first);
/// ```
#[must_use]
pub fn initialize(pit_count: usize, starting_stones: u32) -> (Row, Row) {
    let first = Row::filled(pit_count, starting_stones);
    let second = first.clone();
    (first, second)
}

/// Build the two starting rows described by `config`.
#[must_use]
pub fn initialize_with(config: &BoardConfig) -> (Row, Row) {
    initialize(config.pit_count, config.starting_stones)
}

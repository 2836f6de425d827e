//! Board representation and setup.
//!
//! - `Row`: one player's pits and store
//! - `initialize`: the board factory
//! - `Board`: both rows, addressed by `PlayerId`

pub mod row;
pub mod factory;
pub mod state;

pub use row::{opposite_index, Row, MAX_TOTAL_STONES};
pub use factory::{initialize, initialize_with};
pub use state::Board;

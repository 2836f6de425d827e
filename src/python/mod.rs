//! Python bindings for the kalah-engine rule engine.
//!
//! # Quick Start
//!
//! ```python
//! import kalah_engine as kalah
//!
//! our, their = kalah.initialize(6, 3)
//! status = kalah.apply_move(our, their, 2)
//! if status == kalah.PLAY_AGAIN:
//!     ...
//!
//! board = kalah.Board(pit_count=6, starting_stones=3)
//! board.apply_move(kalah.PlayerId(0), 2)
//! ```

use pyo3::prelude::*;

mod py_board;
mod py_core;

pub use py_board::*;
pub use py_core::*;

/// kalah_engine: board setup and move execution for Kalah.
#[pymodule]
fn kalah_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyBoard>()?;

    m.add_function(wrap_pyfunction!(initialize, m)?)?;
    m.add_function(wrap_pyfunction!(apply_move, m)?)?;

    add_outcome_constants(m)?;

    Ok(())
}

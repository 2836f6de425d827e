//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::PlayerId;
use crate::rules::MoveOutcome;

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Create a new player ID (0 or 1).
    #[new]
    fn new(id: u8) -> PyResult<Self> {
        PlayerId::try_from(id)
            .map(Self)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    /// Get the player index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    /// The player across the board.
    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0.index())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

/// Register the integer outcome codes as module constants.
pub fn add_outcome_constants(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("INVALID_POSITION", MoveOutcome::InvalidPosition.code())?;
    m.add("EMPTY_POSITION", MoveOutcome::EmptyPosition.code())?;
    m.add("ROUND_OVER", MoveOutcome::RoundOver.code())?;
    m.add("PLAY_AGAIN", MoveOutcome::PlayAgain.code())?;
    Ok(())
}

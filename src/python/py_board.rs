//! Board and move bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyList;

use crate::board::{self, Board, Row, MAX_TOTAL_STONES};
use crate::core::{BoardConfig, PlayerId};
use crate::error::BoardError;
use crate::rules;

use super::py_core::PyPlayerId;

/// Build the two starting rows as Python lists.
#[pyfunction]
#[pyo3(signature = (size = 6, start = 3))]
pub fn initialize(size: usize, start: u32) -> (Vec<u32>, Vec<u32>) {
    let (first, second) = board::initialize(size, start);
    (first.into(), second.into())
}

/// Play `position` from `our` against `their`, updating both lists in place.
///
/// Returns one of the integer outcome constants. Negative positions are
/// reported as invalid rather than indexing from the end. Rows of different
/// lengths, or holding more stones than one store can bank, raise
/// `ValueError`.
#[pyfunction]
pub fn apply_move(
    our: &Bound<'_, PyList>,
    their: &Bound<'_, PyList>,
    position: i64,
) -> PyResult<u8> {
    let mut active = Row::from(our.extract::<Vec<u32>>()?);
    let mut opponent = Row::from(their.extract::<Vec<u32>>()?);

    if active.len() != opponent.len() {
        let err = BoardError::MismatchedRows {
            first: active.len(),
            second: opponent.len(),
        };
        return Err(PyValueError::new_err(err.to_string()));
    }

    let total = active.total() + opponent.total();
    if total > MAX_TOTAL_STONES {
        let err = BoardError::TooManyStones { total };
        return Err(PyValueError::new_err(err.to_string()));
    }

    let outcome = rules::apply_move_at(&mut active, &mut opponent, position);
    if outcome.mutated_board() {
        write_back(our, &active)?;
        write_back(their, &opponent)?;
    }
    Ok(outcome.code())
}

fn write_back(list: &Bound<'_, PyList>, row: &Row) -> PyResult<()> {
    for (slot, &stones) in row.as_slice().iter().enumerate() {
        list.set_item(slot, stones)?;
    }
    Ok(())
}

/// Python wrapper for Board.
#[pyclass(name = "Board")]
#[derive(Clone)]
pub struct PyBoard {
    board: Board,
}

#[pymethods]
impl PyBoard {
    /// Create a fresh board.
    #[new]
    #[pyo3(signature = (pit_count = 6, starting_stones = 3))]
    fn new(pit_count: usize, starting_stones: u32) -> PyResult<Self> {
        Board::try_new(&BoardConfig::new(pit_count, starting_stones))
            .map(|board| Self { board })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Build a board from two explicit rows, first player first.
    #[staticmethod]
    fn from_rows(first: Vec<u32>, second: Vec<u32>) -> PyResult<Self> {
        Board::from_rows(Row::from(first), Row::from(second))
            .map(|board| Self { board })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Play `pit` for `player`. Returns an integer outcome code; negative
    /// pits are invalid positions.
    fn apply_move(&mut self, player: &PyPlayerId, pit: i64) -> u8 {
        self.board.apply_move_at(player.0, pit).code()
    }

    /// A player's row as a list, store last.
    fn row(&self, player: &PyPlayerId) -> Vec<u32> {
        self.board.row(player.0).as_slice().to_vec()
    }

    /// Stones in a player's store.
    fn store(&self, player: &PyPlayerId) -> u32 {
        self.board.store(player.0)
    }

    /// Pits a player may move from.
    fn legal_pits(&self, player: &PyPlayerId) -> Vec<usize> {
        self.board.legal_pits(player.0).collect()
    }

    /// Whether a player has any legal move.
    fn has_legal_move(&self, player: &PyPlayerId) -> bool {
        self.board.has_legal_move(player.0)
    }

    #[getter]
    fn pit_count(&self) -> usize {
        self.board.pit_count()
    }

    #[getter]
    fn total_stones(&self) -> u64 {
        self.board.total_stones()
    }

    /// Copy the board for simulation.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "Board(first={:?}, second={:?})",
            self.board.row(PlayerId::FIRST).as_slice(),
            self.board.row(PlayerId::SECOND).as_slice()
        )
    }
}

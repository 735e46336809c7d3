//! Core type bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::{Board, Player, Rules};

/// Python wrapper for Player.
#[pyclass(name = "Player")]
#[derive(Clone, Debug)]
pub struct PyPlayer(pub Player);

#[pymethods]
impl PyPlayer {
    /// Create a player from its seat index (0 = South, 1 = North).
    #[new]
    fn new(index: usize) -> PyResult<Self> {
        match index {
            0 => Ok(Self(Player::South)),
            1 => Ok(Self(Player::North)),
            _ => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "player index must be 0 or 1, got {}",
                index
            ))),
        }
    }

    /// The South player, who moves first.
    #[staticmethod]
    fn south() -> Self {
        Self(Player::South)
    }

    /// The North player.
    #[staticmethod]
    fn north() -> Self {
        Self(Player::North)
    }

    /// Get the seat index (0 = South, 1 = North).
    fn index(&self) -> usize {
        self.0.index()
    }

    /// Get the other player.
    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    fn __repr__(&self) -> String {
        format!("Player.{:?}", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

/// Python wrapper for Rules.
#[pyclass(name = "Rules")]
#[derive(Clone, Debug)]
pub struct PyRules(pub Rules);

#[pymethods]
impl PyRules {
    /// Create a rule set. Defaults match the common six-pocket game.
    #[new]
    #[pyo3(signature = (
        pockets_per_side = 6,
        initial_stones = 4,
        multi_lap = true,
        capture_opposite = true,
        free_turn_on_store = true
    ))]
    fn new(
        pockets_per_side: usize,
        initial_stones: u32,
        multi_lap: bool,
        capture_opposite: bool,
        free_turn_on_store: bool,
    ) -> PyResult<Self> {
        let rules = Rules::new(pockets_per_side, initial_stones)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))?
            .with_multi_lap(multi_lap)
            .with_capture_opposite(capture_opposite)
            .with_free_turn_on_store(free_turn_on_store);
        Ok(Self(rules))
    }

    #[getter]
    fn pockets_per_side(&self) -> usize {
        self.0.pockets_per_side()
    }

    #[getter]
    fn initial_stones(&self) -> u32 {
        self.0.initial_stones()
    }

    #[getter]
    fn multi_lap(&self) -> bool {
        self.0.multi_lap()
    }

    #[getter]
    fn capture_opposite(&self) -> bool {
        self.0.capture_opposite()
    }

    #[getter]
    fn free_turn_on_store(&self) -> bool {
        self.0.free_turn_on_store()
    }

    /// Total pocket count, stores included.
    fn ring_len(&self) -> usize {
        self.0.ring_len()
    }

    /// Store index for the given player.
    fn store_index(&self, player: &PyPlayer) -> usize {
        self.0.store_index(player.0)
    }

    /// Stone count a player must strictly exceed to win.
    fn stones_to_win(&self) -> u32 {
        self.0.stones_to_win()
    }

    fn __repr__(&self) -> String {
        format!(
            "Rules(pockets_per_side={}, initial_stones={}, multi_lap={}, capture_opposite={}, free_turn_on_store={})",
            self.0.pockets_per_side(),
            self.0.initial_stones(),
            self.0.multi_lap(),
            self.0.capture_opposite(),
            self.0.free_turn_on_store(),
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for Board.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Create the opening position for the given rules.
    #[new]
    fn new(rules: &PyRules) -> Self {
        Self(Board::new(&rules.0))
    }

    /// Build a position from explicit pocket counts.
    #[staticmethod]
    fn from_pockets(rules: &PyRules, pockets: Vec<u32>, to_move: &PyPlayer) -> PyResult<Self> {
        let board = Board::with_pockets(&rules.0, &pockets, to_move.0)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))?;
        Ok(Self(board))
    }

    /// Pocket counts as a numpy array in ring order.
    fn pockets<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u32>> {
        PyArray1::from_slice_bound(py, self.0.pockets())
    }

    /// Stone count in a single pocket.
    fn pocket(&self, index: usize) -> u32 {
        self.0.pocket(index)
    }

    /// Stone count in the given player's store.
    fn store(&self, player: &PyPlayer) -> u32 {
        self.0.store(player.0)
    }

    /// The side whose turn it is.
    #[getter]
    fn to_move(&self) -> PyPlayer {
        PyPlayer(self.0.to_move())
    }

    fn __repr__(&self) -> String {
        format!("{}", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

//! Engine and simulation bindings for Python.

use pyo3::prelude::*;

use crate::core::Player;
use crate::engine::{GameOutcome, Mancala};
use crate::selector::RandomSelector;
use crate::sim::{MatchConfig, MatchRunner};

use super::py_core::{PyBoard, PyPlayer, PyRules};

/// Python wrapper for GameOutcome.
#[pyclass(name = "GameOutcome")]
#[derive(Clone, Debug)]
pub struct PyGameOutcome(pub GameOutcome);

#[pymethods]
impl PyGameOutcome {
    /// Whether the game ended level.
    fn is_draw(&self) -> bool {
        self.0 == GameOutcome::Draw
    }

    /// The winning player, or None for a draw.
    fn winner(&self) -> Option<PyPlayer> {
        match self.0 {
            GameOutcome::Winner(player) => Some(PyPlayer(player)),
            GameOutcome::Draw => None,
        }
    }

    fn __repr__(&self) -> String {
        format!("GameOutcome({:?})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for the Mancala engine.
#[pyclass(name = "Mancala")]
#[derive(Clone, Debug)]
pub struct PyMancala(pub Mancala);

#[pymethods]
impl PyMancala {
    /// Create an engine for the given rules.
    #[new]
    fn new(rules: &PyRules) -> Self {
        Self(Mancala::new(rules.0))
    }

    /// The opening position.
    fn new_game(&self) -> PyBoard {
        PyBoard(self.0.new_game())
    }

    /// Sow from a pocket, returning the successor position.
    ///
    /// Raises ValueError for an illegal move.
    fn apply_move(&self, board: &PyBoard, pocket: usize) -> PyResult<PyBoard> {
        self.0
            .apply_move(&board.0, pocket)
            .map(PyBoard)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    /// Legal pockets for a player, in ascending order.
    ///
    /// Defaults to the side to move.
    #[pyo3(signature = (board, player = None))]
    fn available_moves(&self, board: &PyBoard, player: Option<&PyPlayer>) -> Vec<usize> {
        let player = player.map_or_else(|| board.0.to_move(), |p| p.0);
        self.0.available_moves(&board.0, player)
    }

    /// Whether the game has ended.
    fn is_terminal(&self, board: &PyBoard) -> bool {
        self.0.is_terminal(&board.0)
    }

    /// Outcome of the game, or None while it is still running.
    fn winner(&self, board: &PyBoard) -> Option<PyGameOutcome> {
        self.0.winner(&board.0).map(PyGameOutcome)
    }

    /// Final scores as (south, north), terminal sweep included.
    fn final_scores(&self, board: &PyBoard) -> (u32, u32) {
        let scores = self.0.final_scores(&board.0);
        (scores[Player::South], scores[Player::North])
    }

    /// The player's store count, an incremental feedback signal.
    fn reward(&self, board: &PyBoard, player: &PyPlayer) -> u32 {
        self.0.reward(&board.0, player.0)
    }

    fn __repr__(&self) -> String {
        format!(
            "Mancala(pockets_per_side={}, initial_stones={})",
            self.0.rules().pockets_per_side(),
            self.0.rules().initial_stones(),
        )
    }
}

/// Play a seeded random-vs-random game and return the final position.
#[pyfunction]
#[pyo3(signature = (engine, board, seed, move_limit = 500))]
pub fn random_playout(
    engine: &PyMancala,
    board: &PyBoard,
    seed: u64,
    move_limit: usize,
) -> PyResult<PyBoard> {
    let runner = MatchRunner::new(engine.0, MatchConfig::new().with_move_limit(move_limit));
    let mut south = RandomSelector::new(seed);
    let mut north = RandomSelector::new(seed.wrapping_add(1));

    let transcript = runner
        .play_from(board.0.clone(), &mut south, &mut north)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))?;

    let last = transcript
        .final_position()
        .cloned()
        .unwrap_or_else(|| board.0.clone());
    Ok(PyBoard(last))
}

/// Count distinct move sequences of the given depth.
#[pyfunction]
pub fn perft(engine: &PyMancala, board: &PyBoard, depth: u32) -> u64 {
    crate::engine::perft_memoized(&engine.0, &board.0, depth)
}

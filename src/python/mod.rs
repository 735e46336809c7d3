//! Python bindings for the mancala-engine crate.
//!
//! This module provides PyO3 bindings for driving games from Python, e.g.
//! to generate self-play data for RL training loops.
//!
//! # Quick Start
//!
//! ```python
//! import mancala_engine as me
//!
//! # Standard six-pocket rules
//! rules = me.Rules()
//! engine = me.Mancala(rules)
//!
//! board = engine.new_game()
//! board = engine.apply_move(board, 2)
//!
//! # Seeded random playout to a final position
//! final = me.random_playout(engine, board, seed=42)
//! print(engine.final_scores(final))
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// mancala-engine: a Mancala rules engine for RL training.
///
/// This module provides:
/// - Rule configuration and immutable board positions
/// - Move application and outcome evaluation
/// - Seeded random playouts and perft counting
#[pymodule]
fn mancala_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyRules>()?;
    m.add_class::<PyBoard>()?;

    // Engine
    m.add_class::<PyMancala>()?;
    m.add_class::<PyGameOutcome>()?;

    // Simulation helpers
    m.add_function(wrap_pyfunction!(py_engine::random_playout, m)?)?;
    m.add_function(wrap_pyfunction!(py_engine::perft, m)?)?;

    Ok(())
}

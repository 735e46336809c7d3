//! # mancala-engine
//!
//! A Mancala rules engine optimized for RL/MCTS training.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Applying a move never mutates the input
//!    position. Every transition returns a fresh [`Board`].
//!
//! 2. **Configuration Over Convention**: Board size, stone count, and the
//!    capture/free-turn rules all live in [`Rules`]. Nothing is hardcoded
//!    to the six-pocket game.
//!
//! 3. **Deterministic Replay**: All randomness flows through seeded
//!    [`GameRng`] instances, so any match can be reproduced exactly.
//!
//! ## Modules
//!
//! - `core`: Players, rule configuration, board positions, RNG
//! - `engine`: Move application, outcome evaluation, perft counting
//! - `error`: Typed errors for invalid moves and configuration
//! - `selector`: Move selection strategies for driving games
//! - `sim`: Match runner and serializable transcripts

pub mod core;
pub mod engine;
pub mod error;
pub mod selector;
pub mod sim;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Board, GameRng, Player, PlayerPair, Rules};

pub use crate::engine::{perft, perft_memoized, GameOutcome, Mancala};

pub use crate::error::{BoardError, InvalidMove, RulesError};

pub use crate::selector::{GreedySelector, MoveSelector, RandomSelector};

pub use crate::sim::{MatchConfig, MatchRunner, MoveRecord, Transcript};

//! Self-play simulation.
//!
//! A [`MatchRunner`] plays two [`MoveSelector`](crate::selector::MoveSelector)s
//! against each other and records every move and position in a
//! [`Transcript`], which serializes to compact bytes for storage.
//!
//! ## Quick Start
//!
//! ```
//! use mancala_engine::{Mancala, MatchConfig, MatchRunner, RandomSelector, Rules};
//!
//! let engine = Mancala::new(Rules::default());
//! let runner = MatchRunner::new(engine, MatchConfig::default());
//!
//! let mut south = RandomSelector::new(7);
//! let mut north = RandomSelector::new(11);
//! let transcript = runner.play(&mut south, &mut north)?;
//!
//! assert_eq!(transcript.positions.len(), transcript.len() + 1);
//! # Ok::<(), mancala_engine::InvalidMove>(())
//! ```

pub mod runner;
pub mod transcript;

pub use runner::{MatchConfig, MatchRunner};
pub use transcript::{MoveRecord, Transcript};

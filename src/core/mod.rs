//! Core types: players, rules, the board value, RNG.
//!
//! This module holds the building blocks the engine operates on. Rules and
//! boards are plain values; everything derived from them (geometry, legal
//! moves, outcomes) is computed rather than stored.

pub mod board;
pub mod player;
pub mod rng;
pub mod rules;

pub use board::Board;
pub use player::{Player, PlayerPair};
pub use rng::GameRng;
pub use rules::Rules;

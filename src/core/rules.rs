//! Rule configuration and board geometry.
//!
//! `Rules` is validated once at construction and shared read-only by every
//! board of a game. All derived positions (store indices, field ranges, the
//! opposite pocket) are computed from `pockets_per_side` on demand so they
//! can never drift out of sync with the configuration.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::RulesError;

use super::Player;

/// Immutable rule set for one game.
///
/// The defaults give the standard game: 6 pockets per side, 4 stones per
/// pocket, with capture, free turns, and multi-lap play all enabled.
///
/// ```
/// use mancala_engine::Rules;
///
/// let rules = Rules::new(6, 4)?.with_capture_opposite(false);
/// assert_eq!(rules.ring_len(), 14);
/// assert_eq!(rules.stones_to_win(), 24);
/// # Ok::<(), mancala_engine::RulesError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rules {
    pockets_per_side: usize,
    initial_stones: u32,
    multi_lap: bool,
    capture_opposite: bool,
    free_turn_on_store: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            pockets_per_side: 6,
            initial_stones: 4,
            multi_lap: true,
            capture_opposite: true,
            free_turn_on_store: true,
        }
    }
}

impl Rules {
    /// Create a rule set with the given board dimensions and every rule
    /// flag enabled.
    pub fn new(pockets_per_side: usize, initial_stones: u32) -> Result<Self, RulesError> {
        if pockets_per_side == 0 {
            return Err(RulesError::ZeroPockets);
        }
        if pockets_per_side > 64 {
            return Err(RulesError::TooManyPockets(pockets_per_side));
        }
        if initial_stones == 0 {
            return Err(RulesError::ZeroStones);
        }
        if initial_stones > 256 {
            return Err(RulesError::TooManyStones(initial_stones));
        }

        Ok(Self {
            pockets_per_side,
            initial_stones,
            ..Self::default()
        })
    }

    /// Allow the mover to keep the turn after a free turn.
    #[must_use]
    pub fn with_multi_lap(mut self, enabled: bool) -> Self {
        self.multi_lap = enabled;
        self
    }

    /// Enable capturing when the last stone lands on an own empty pocket.
    #[must_use]
    pub fn with_capture_opposite(mut self, enabled: bool) -> Self {
        self.capture_opposite = enabled;
        self
    }

    /// Flag a free turn when the last stone lands in the mover's store.
    #[must_use]
    pub fn with_free_turn_on_store(mut self, enabled: bool) -> Self {
        self.free_turn_on_store = enabled;
        self
    }

    /// Field pockets on each side of the board.
    #[must_use]
    pub fn pockets_per_side(&self) -> usize {
        self.pockets_per_side
    }

    /// Stones seeded into each field pocket at game start.
    #[must_use]
    pub fn initial_stones(&self) -> u32 {
        self.initial_stones
    }

    /// Whether a free turn keeps the mover on the move.
    #[must_use]
    pub fn multi_lap(&self) -> bool {
        self.multi_lap
    }

    /// Whether landing on an own empty pocket captures the opposite pocket.
    #[must_use]
    pub fn capture_opposite(&self) -> bool {
        self.capture_opposite
    }

    /// Whether a last stone in the mover's store flags a free turn.
    #[must_use]
    pub fn free_turn_on_store(&self) -> bool {
        self.free_turn_on_store
    }

    // === Derived geometry ===

    /// Total pockets on the ring, stores included.
    #[must_use]
    pub fn ring_len(&self) -> usize {
        2 * (self.pockets_per_side + 1)
    }

    /// Index of a player's store.
    #[must_use]
    pub fn store_index(&self, player: Player) -> usize {
        match player {
            Player::South => self.pockets_per_side,
            Player::North => 2 * self.pockets_per_side + 1,
        }
    }

    /// Index range of a player's field pockets.
    #[must_use]
    pub fn field_range(&self, player: Player) -> Range<usize> {
        match player {
            Player::South => 0..self.pockets_per_side,
            Player::North => self.pockets_per_side + 1..2 * self.pockets_per_side + 1,
        }
    }

    /// Whether an index names one of the two stores.
    #[must_use]
    pub fn is_store(&self, index: usize) -> bool {
        index == self.store_index(Player::South) || index == self.store_index(Player::North)
    }

    /// The field pocket directly across the board from a field pocket.
    #[must_use]
    pub fn opposite_index(&self, index: usize) -> usize {
        2 * self.pockets_per_side - index
    }

    /// Strict-majority threshold: a store must exceed this to win outright.
    ///
    /// Equals half the stones in play.
    #[must_use]
    pub fn stones_to_win(&self) -> u32 {
        self.pockets_per_side as u32 * self.initial_stones
    }

    /// Stones in play for the whole game.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        2 * self.stones_to_win()
    }
}

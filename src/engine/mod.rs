//! The rules engine: move application and outcome evaluation.
//!
//! `Mancala` holds an immutable rule set and exposes pure functions over
//! board values. Applying a move never touches the input board, so many
//! candidate moves can be probed from one position concurrently.
//!
//! ```
//! use mancala_engine::{InvalidMove, Mancala, Player, Rules};
//!
//! let engine = Mancala::new(Rules::default());
//! let board = engine.new_game();
//! let board = engine.apply_move(&board, 2)?;
//!
//! // Pocket 2 reaches South's store exactly, granting a free turn.
//! assert_eq!(board.to_move(), Player::South);
//! assert_eq!(engine.reward(&board, Player::South), 1);
//! # Ok::<(), InvalidMove>(())
//! ```

mod outcome;
mod perft;
mod sow;

pub use perft::{perft, perft_memoized};

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player, Rules};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Single winner.
    Winner(Player),
    /// Equal scores after the final sweep.
    Draw,
}

impl GameOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameOutcome::Winner(p) if *p == player)
    }
}

/// The rules engine.
///
/// Construction is the only place rules enter the system; from then on
/// every method is a pure function of the boards passed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mancala {
    rules: Rules,
}

impl Mancala {
    /// Create an engine for the given rule set.
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        Self { rules }
    }

    /// The rule set this engine plays under.
    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Start a fresh game.
    #[must_use]
    pub fn new_game(&self) -> Board {
        Board::new(&self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_outcome_is_winner() {
        let result = GameOutcome::Winner(Player::North);
        assert!(!result.is_winner(Player::South));
        assert!(result.is_winner(Player::North));

        let draw = GameOutcome::Draw;
        assert!(!draw.is_winner(Player::South));
        assert!(!draw.is_winner(Player::North));
    }

    #[test]
    fn test_new_game_matches_rules() {
        let engine = Mancala::new(Rules::new(4, 3).unwrap());
        let board = engine.new_game();

        assert_eq!(board.pockets().len(), 10);
        assert_eq!(board.pockets().iter().sum::<u32>(), 24);
        assert_eq!(board.to_move(), Player::South);
    }
}

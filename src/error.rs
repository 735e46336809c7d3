//! Error types for rule configuration and move application.
//!
//! The engine is a pure function of its inputs, so every error here reports
//! a caller bug. Nothing is transient or retryable: a rejected move leaves
//! the board untouched, a rejected rule set never constructs.

use crate::core::Player;

/// A move the engine refused to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("pocket {index} is outside the board")]
    OutOfRange { index: usize },

    #[error("pocket {index} is a store and cannot be sown from")]
    StorePocket { index: usize },

    #[error("pocket {index} does not belong to {player}")]
    OpponentPocket { index: usize, player: Player },

    #[error("pocket {index} is empty")]
    EmptyPocket { index: usize },
}

/// A rule configuration the engine refused to construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("pockets per side must be at least 1")]
    ZeroPockets,

    #[error("initial stones per pocket must be at least 1")]
    ZeroStones,

    #[error("{0} pockets per side exceeds the supported maximum of 64")]
    TooManyPockets(usize),

    #[error("{0} initial stones per pocket exceeds the supported maximum of 256")]
    TooManyStones(u32),
}

/// A board position that does not fit its rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected {expected} pockets for this rule set, got {actual}")]
    WrongPocketCount { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        let err = InvalidMove::StorePocket { index: 6 };
        assert_eq!(err.to_string(), "pocket 6 is a store and cannot be sown from");

        let err = InvalidMove::OpponentPocket {
            index: 8,
            player: Player::South,
        };
        assert_eq!(err.to_string(), "pocket 8 does not belong to South");
    }

    #[test]
    fn test_rules_error_display() {
        assert_eq!(
            RulesError::ZeroPockets.to_string(),
            "pockets per side must be at least 1"
        );
        assert_eq!(
            RulesError::TooManyPockets(100).to_string(),
            "100 pockets per side exceeds the supported maximum of 64"
        );
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::WrongPocketCount {
            expected: 14,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "expected 14 pockets for this rule set, got 12"
        );
    }
}

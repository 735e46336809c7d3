//! The board value: pocket counts plus the side to move.
//!
//! A `Board` is a plain value. Applying a move produces a new `Board` and
//! leaves the old one untouched, so callers keep history by holding on to
//! earlier values. Cloning is cheap: the pocket counts live inline for
//! standard board sizes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::BoardError;

use super::{Player, Rules};

/// One position in a game.
///
/// Pocket layout follows the ring: South's field pockets, South's store,
/// North's field pockets, North's store. Equality and hashing cover the
/// full position (counts and side to move), so boards can key memo tables.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub(crate) pockets: SmallVec<[u32; 16]>,
    pub(crate) to_move: Player,
}

impl Board {
    /// The opening position: every field pocket seeded, stores empty,
    /// South to move.
    #[must_use]
    pub fn new(rules: &Rules) -> Self {
        let pockets = (0..rules.ring_len())
            .map(|index| {
                if rules.is_store(index) {
                    0
                } else {
                    rules.initial_stones()
                }
            })
            .collect();

        Self {
            pockets,
            to_move: Player::South,
        }
    }

    /// Build an arbitrary position, checking only that the pocket count
    /// matches the rule set.
    pub fn with_pockets(
        rules: &Rules,
        pockets: &[u32],
        to_move: Player,
    ) -> Result<Self, BoardError> {
        if pockets.len() != rules.ring_len() {
            return Err(BoardError::WrongPocketCount {
                expected: rules.ring_len(),
                actual: pockets.len(),
            });
        }

        Ok(Self {
            pockets: SmallVec::from_slice(pockets),
            to_move,
        })
    }

    /// Stones in one pocket.
    #[must_use]
    pub fn pocket(&self, index: usize) -> u32 {
        self.pockets[index]
    }

    /// All pocket counts in ring order.
    #[must_use]
    pub fn pockets(&self) -> &[u32] {
        &self.pockets
    }

    /// Whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Stones in a player's store.
    ///
    /// The layout is recovered from the ring length, so this needs no
    /// rule set.
    #[must_use]
    pub fn store(&self, player: Player) -> u32 {
        let pockets_per_side = self.pockets.len() / 2 - 1;
        match player {
            Player::South => self.pockets[pockets_per_side],
            Player::North => self.pockets[2 * pockets_per_side + 1],
        }
    }
}

impl std::fmt::Display for Board {
    /// Renders the conventional two-rank view: North's store on the left,
    /// North's pockets mirrored so opposite pockets line up, and a `*`
    /// marking the side to move.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pockets_per_side = self.pockets.len() / 2 - 1;

        write!(f, "North {:>3} |", self.store(Player::North))?;
        for index in (pockets_per_side + 1..2 * pockets_per_side + 1).rev() {
            write!(f, " {:>3}", self.pockets[index])?;
        }
        write!(f, " |")?;
        if self.to_move == Player::North {
            write!(f, " *")?;
        }
        writeln!(f)?;

        write!(f, "South     |")?;
        for index in 0..pockets_per_side {
            write!(f, " {:>3}", self.pockets[index])?;
        }
        write!(f, " | {:>3}", self.store(Player::South))?;
        if self.to_move == Player::South {
            write!(f, " *")?;
        }
        Ok(())
    }
}

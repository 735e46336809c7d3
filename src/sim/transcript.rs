//! Match records.
//!
//! A transcript captures a full game: the rules it was played under, every
//! move in order, every position reached, and the outcome. Records and
//! positions live in persistent vectors, so keeping a transcript around
//! while play continues (or branching analysis off any prefix) is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Player, PlayerPair, Rules};
use crate::engine::GameOutcome;

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who sowed.
    pub player: Player,
    /// Source pocket.
    pub pocket: usize,
    /// 0-indexed position in the game.
    pub move_number: usize,
}

/// A complete recorded game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Rules the game was played under.
    pub rules: Rules,

    /// Selector labels per side.
    pub selectors: PlayerPair<String>,

    /// Moves in order.
    pub records: Vector<MoveRecord>,

    /// The opening position plus one position per applied move.
    pub positions: Vector<Board>,

    /// Final outcome. `None` when the match stopped early: the move limit
    /// was hit or a selector declined to move.
    pub outcome: Option<GameOutcome>,
}

impl Transcript {
    /// Start a transcript at an opening position.
    #[must_use]
    pub fn new(rules: Rules, selectors: PlayerPair<String>, opening: Board) -> Self {
        let mut positions = Vector::new();
        positions.push_back(opening);

        Self {
            rules,
            selectors,
            records: Vector::new(),
            positions,
            outcome: None,
        }
    }

    /// Record one applied move and the position it produced.
    pub fn push(&mut self, player: Player, pocket: usize, position: Board) {
        let move_number = self.records.len();
        self.records.push_back(MoveRecord {
            player,
            pocket,
            move_number,
        });
        self.positions.push_back(position);
    }

    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True before any move has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The last position reached.
    ///
    /// Only `None` for a deserialized transcript that carries no positions.
    #[must_use]
    pub fn final_position(&self) -> Option<&Board> {
        self.positions.back()
    }

    /// Moves made by one side.
    pub fn player_moves(&self, player: Player) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter().filter(move |record| record.player == player)
    }

    /// Serialize to compact bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserialize from `to_bytes` output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

//! Driving loop for selector-vs-selector matches.

use crate::core::{Board, Player, PlayerPair};
use crate::engine::Mancala;
use crate::error::InvalidMove;
use crate::selector::MoveSelector;

use super::transcript::Transcript;

/// Configuration for a match.
#[derive(Clone, Copy, Debug)]
pub struct MatchConfig {
    /// Maximum moves before the match is abandoned without an outcome.
    pub move_limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { move_limit: 500 }
    }
}

impl MatchConfig {
    /// Create a match config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the move limit.
    #[must_use]
    pub fn with_move_limit(mut self, limit: usize) -> Self {
        self.move_limit = limit;
        self
    }
}

/// Plays two selectors against each other and records the game.
///
/// The runner owns the turn loop only; all rule knowledge stays in the
/// engine, all strategy in the selectors.
pub struct MatchRunner {
    engine: Mancala,
    config: MatchConfig,
}

impl MatchRunner {
    /// Create a runner for the given engine and config.
    #[must_use]
    pub fn new(engine: Mancala, config: MatchConfig) -> Self {
        Self { engine, config }
    }

    /// The engine this runner drives.
    #[must_use]
    pub fn engine(&self) -> &Mancala {
        &self.engine
    }

    /// Play one game from the standard opening.
    ///
    /// Errors only if a selector returns an illegal move, which is a
    /// selector bug the caller should hear about.
    pub fn play(
        &self,
        south: &mut dyn MoveSelector,
        north: &mut dyn MoveSelector,
    ) -> Result<Transcript, InvalidMove> {
        self.play_from(self.engine.new_game(), south, north)
    }

    /// Play from an arbitrary opening position.
    ///
    /// The loop stops at the first terminal position, when the active
    /// side's selector declines to move, or at the move limit. The last two
    /// leave the transcript without an outcome.
    pub fn play_from(
        &self,
        opening: Board,
        south: &mut dyn MoveSelector,
        north: &mut dyn MoveSelector,
    ) -> Result<Transcript, InvalidMove> {
        let selectors = PlayerPair::new(|player| match player {
            Player::South => south.name().to_string(),
            Player::North => north.name().to_string(),
        });

        let mut board = opening.clone();
        let mut transcript = Transcript::new(*self.engine.rules(), selectors, opening);

        for _ in 0..self.config.move_limit {
            if self.engine.is_terminal(&board) {
                break;
            }

            let mover = board.to_move();
            let selector: &mut dyn MoveSelector = match mover {
                Player::South => &mut *south,
                Player::North => &mut *north,
            };

            let pocket = match selector.select_move(&self.engine, &board) {
                Some(pocket) => pocket,
                None => break,
            };

            let next = self.engine.apply_move(&board, pocket)?;
            transcript.push(mover, pocket, next.clone());
            board = next;
        }

        transcript.outcome = self.engine.winner(&board);
        Ok(transcript)
    }
}

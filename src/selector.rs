//! Pluggable move selection.
//!
//! A selector decides which pocket the side to move sows from. Search or
//! learned strategies implement the same trait from outside the crate; the
//! bundled selectors are scripted baselines for driving matches and
//! validating opponents against.

use crate::core::{Board, GameRng};
use crate::engine::Mancala;

/// Chooses a move for the side to move.
pub trait MoveSelector {
    /// Pick one of `engine.available_moves(board, board.to_move())`, or
    /// `None` to decline. Declining is distinct from the position being
    /// terminal; the driving loop stops either way.
    fn select_move(&mut self, engine: &Mancala, board: &Board) -> Option<usize>;

    /// Label used in transcripts.
    fn name(&self) -> &str;
}

/// Uniform choice over the available moves, reproducible from its seed.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: GameRng,
}

impl RandomSelector {
    /// Create a selector with its own deterministic stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, engine: &Mancala, board: &Board) -> Option<usize> {
        let moves = engine.available_moves(board, board.to_move());
        self.rng.choose(&moves).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// One-ply lookahead: plays the move that grows the mover's store the most,
/// ties going to the lowest pocket index.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySelector;

impl GreedySelector {
    /// Create a greedy selector.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MoveSelector for GreedySelector {
    fn select_move(&mut self, engine: &Mancala, board: &Board) -> Option<usize> {
        let mover = board.to_move();
        let before = engine.reward(board, mover);

        let mut best: Option<(usize, u32)> = None;
        for pocket in engine.available_moves(board, mover) {
            if let Ok(next) = engine.apply_move(board, pocket) {
                let gain = engine.reward(&next, mover) - before;
                match best {
                    Some((_, best_gain)) if gain <= best_gain => {}
                    _ => best = Some((pocket, gain)),
                }
            }
        }

        best.map(|(pocket, _)| pocket)
    }

    fn name(&self) -> &str {
        "greedy"
    }
}

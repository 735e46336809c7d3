//! Outcome evaluation: legal moves, terminal detection, winner, reward.

use std::cmp::Ordering;

use crate::core::{Board, Player, PlayerPair};

use super::{GameOutcome, Mancala};

impl Mancala {
    /// The player's sowable pockets, in ascending index order.
    #[must_use]
    pub fn available_moves(&self, board: &Board, player: Player) -> Vec<usize> {
        self.rules
            .field_range(player)
            .filter(|&index| board.pocket(index) > 0)
            .collect()
    }

    /// Both scores with the end-of-game sweep applied.
    ///
    /// Each side scores its store. When a side has no move left, the other
    /// side additionally keeps its remaining field stones: they count into
    /// that other side's score. Before anyone is blocked the scores are
    /// simply the store counts.
    #[must_use]
    pub fn final_scores(&self, board: &Board) -> PlayerPair<u32> {
        let mut scores = PlayerPair::new(|player| board.store(player));

        for player in Player::ALL {
            if !self.has_moves(board, player) {
                let other = player.opponent();
                scores[other] += self.field_sum(board, other);
            }
        }

        scores
    }

    /// Outcome of the game, or `None` while it is still running.
    ///
    /// A score strictly above the majority threshold wins outright. Once a
    /// side has no move left, the swept scores are compared and equality is
    /// an explicit draw.
    #[must_use]
    pub fn winner(&self, board: &Board) -> Option<GameOutcome> {
        let scores = self.final_scores(board);
        let threshold = self.rules.stones_to_win();

        if scores[Player::South] > threshold {
            return Some(GameOutcome::Winner(Player::South));
        }
        if scores[Player::North] > threshold {
            return Some(GameOutcome::Winner(Player::North));
        }

        if !self.has_moves(board, Player::South) || !self.has_moves(board, Player::North) {
            return Some(match scores[Player::South].cmp(&scores[Player::North]) {
                Ordering::Greater => GameOutcome::Winner(Player::South),
                Ordering::Less => GameOutcome::Winner(Player::North),
                Ordering::Equal => GameOutcome::Draw,
            });
        }

        None
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(&self, board: &Board) -> bool {
        self.winner(board).is_some()
    }

    /// The player's store count, an incremental feedback signal.
    #[must_use]
    pub fn reward(&self, board: &Board, player: Player) -> u32 {
        board.store(player)
    }

    fn has_moves(&self, board: &Board, player: Player) -> bool {
        self.rules
            .field_range(player)
            .any(|index| board.pocket(index) > 0)
    }

    fn field_sum(&self, board: &Board, player: Player) -> u32 {
        self.rules
            .field_range(player)
            .map(|index| board.pocket(index))
            .sum()
    }
}

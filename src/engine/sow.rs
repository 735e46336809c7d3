//! Move application: circular sowing with capture and free-turn detection.

use crate::core::Board;
use crate::error::InvalidMove;

use super::Mancala;

impl Mancala {
    /// Sow the stones from `pocket` for the side to move, producing the
    /// next position.
    ///
    /// Stones are lifted into a hand and dropped one per pocket around the
    /// ring. The opponent's store is passed over without consuming a stone,
    /// on every lap. Two last-stone rules apply:
    ///
    /// - landing in the mover's own store flags a free turn (when
    ///   enabled): the turn stays with the mover if multi-lap play is on;
    /// - landing on an own field pocket that was empty, while the pocket
    ///   directly across holds stones, captures (when enabled): the landing
    ///   stone and the opposite pocket's contents go to the mover's store
    ///   and the landing pocket stays empty.
    ///
    /// The input board is never modified. `pocket` must be one of the
    /// mover's field pockets and hold at least one stone.
    pub fn apply_move(&self, board: &Board, pocket: usize) -> Result<Board, InvalidMove> {
        let mover = board.to_move();

        if pocket >= self.rules.ring_len() {
            return Err(InvalidMove::OutOfRange { index: pocket });
        }
        if self.rules.is_store(pocket) {
            return Err(InvalidMove::StorePocket { index: pocket });
        }
        if !self.rules.field_range(mover).contains(&pocket) {
            return Err(InvalidMove::OpponentPocket {
                index: pocket,
                player: mover,
            });
        }
        if board.pocket(pocket) == 0 {
            return Err(InvalidMove::EmptyPocket { index: pocket });
        }

        let own_store = self.rules.store_index(mover);
        let skipped_store = self.rules.store_index(mover.opponent());

        let mut pockets = board.pockets.clone();
        let mut hand = pockets[pocket];
        pockets[pocket] = 0;

        let mut index = pocket;
        let mut free_turn = false;

        while hand > 0 {
            index = (index + 1) % self.rules.ring_len();
            if index == skipped_store {
                continue;
            }

            if hand == 1 {
                if index == own_store {
                    if self.rules.free_turn_on_store() {
                        free_turn = true;
                    }
                } else if self.rules.capture_opposite()
                    && pockets[index] == 0
                    && self.rules.field_range(mover).contains(&index)
                {
                    let opposite = self.rules.opposite_index(index);
                    let captured = pockets[opposite];
                    if captured > 0 {
                        pockets[opposite] = 0;
                        pockets[own_store] += captured + 1;
                        hand -= 1;
                        continue;
                    }
                }
            }

            pockets[index] += 1;
            hand -= 1;
        }

        let to_move = if free_turn && self.rules.multi_lap() {
            mover
        } else {
            mover.opponent()
        };

        Ok(Board { pockets, to_move })
    }
}

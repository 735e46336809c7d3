//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two sides of the board. `South` owns the low pocket indices and
//! moves first; `North` owns the upper half of the ring.
//!
//! ## PlayerPair
//!
//! Per-player data storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of the board.
///
/// `South` moves first and owns field pockets `0..pockets_per_side`;
/// `North` owns the field pockets in the upper half of the ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    South,
    North,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::South, Player::North];

    /// Get the raw side index (South is 0, North is 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::South => 0,
            Player::North => 1,
        }
    }

    /// Get the other side.
    ///
    /// ```
    /// use mancala_engine::Player;
    ///
    /// assert_eq!(Player::South.opponent(), Player::North);
    /// assert_eq!(Player::North.opponent(), Player::South);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::South => Player::North,
            Player::North => Player::South,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::South => write!(f, "South"),
            Player::North => write!(f, "North"),
        }
    }
}

/// Per-player data storage for the two sides.
///
/// Backed by a fixed two-element array, indexed by `Player`.
///
/// ## Example
///
/// ```
/// use mancala_engine::{Player, PlayerPair};
///
/// let mut scores: PlayerPair<u32> = PlayerPair::new(|_| 0);
///
/// scores[Player::North] = 12;
/// assert_eq!(scores[Player::South], 0);
/// assert_eq!(scores[Player::North], 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a new PlayerPair with values from a factory function.
    ///
    /// The factory receives each `Player` in turn order.
    pub fn new(mut factory: impl FnMut(Player) -> T) -> Self {
        Self {
            data: [factory(Player::South), factory(Player::North)],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.iter().map(move |&player| (player, self.get(player)))
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_basics() {
        assert_eq!(Player::South.index(), 0);
        assert_eq!(Player::North.index(), 1);
        assert_eq!(format!("{}", Player::South), "South");
        assert_eq!(format!("{}", Player::North), "North");
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::South.opponent(), Player::North);
        assert_eq!(Player::North.opponent(), Player::South);
        assert_eq!(Player::South.opponent().opponent(), Player::South);
    }

    #[test]
    fn test_player_all_in_turn_order() {
        assert_eq!(Player::ALL, [Player::South, Player::North]);
    }

    #[test]
    fn test_player_pair_new() {
        let pair: PlayerPair<usize> = PlayerPair::new(|p| p.index() * 10);

        assert_eq!(pair[Player::South], 0);
        assert_eq!(pair[Player::North], 10);
    }

    #[test]
    fn test_player_pair_mutation() {
        let mut pair: PlayerPair<i32> = PlayerPair::new(|_| 0);

        pair[Player::South] = 10;
        *pair.get_mut(Player::North) = 20;

        assert_eq!(pair[Player::South], 10);
        assert_eq!(pair[Player::North], 20);
    }

    #[test]
    fn test_player_pair_iter() {
        let pair: PlayerPair<i32> = PlayerPair::new(|p| p.index() as i32 + 1);

        let pairs: Vec<_> = pair.iter().collect();
        assert_eq!(pairs, vec![(Player::South, &1), (Player::North, &2)]);
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Player::North).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Player::North);
    }

    #[test]
    fn test_player_pair_serialization() {
        let pair: PlayerPair<u32> = PlayerPair::new(|p| p.index() as u32 + 5);
        let json = serde_json::to_string(&pair).unwrap();
        let back: PlayerPair<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, back);
    }
}

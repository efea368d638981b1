//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two sides of the game. `O` always moves on even rounds, `X` on odd
//! rounds, so `O` opens every game.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    O,
    X,
}

impl Player {
    /// Both players in index order.
    pub const ALL: [Player; 2] = [Player::O, Player::X];

    /// The opponent.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Raw player index: O = 0, X = 1.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::O => 0,
            Player::X => 1,
        }
    }

    /// Player to move on the given round.
    ///
    /// ```
    /// use quantum_ttt::core::Player;
    ///
    /// assert_eq!(Player::for_round(0), Player::O);
    /// assert_eq!(Player::for_round(7), Player::X);
    /// ```
    #[must_use]
    pub const fn for_round(round: u32) -> Self {
        if round % 2 == 0 {
            Player::O
        } else {
            Player::X
        }
    }

    /// Single-letter symbol used when rendering the board.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::O => 'O',
            Player::X => 'X',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use quantum_ttt::core::{Player, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(0);
/// wins[Player::X] += 1;
///
/// assert_eq!(wins[Player::X], 1);
/// assert_eq!(wins[Player::O], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::O), factory(Player::X)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
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

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_basics() {
        assert_eq!(Player::O.index(), 0);
        assert_eq!(Player::X.index(), 1);
        assert_eq!(Player::O.other(), Player::X);
        assert_eq!(Player::X.other(), Player::O);
        assert_eq!(format!("{}", Player::X), "X");
    }

    #[test]
    fn test_player_for_round() {
        assert_eq!(Player::for_round(0), Player::O);
        assert_eq!(Player::for_round(1), Player::X);
        assert_eq!(Player::for_round(2), Player::O);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[Player::O], 0);
        assert_eq!(map[Player::X], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[Player::O] = 10;
        map[Player::X] = 20;

        assert_eq!(map[Player::O], 10);
        assert_eq!(map[Player::X], 20);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::O, &0), (Player::X, &1)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}

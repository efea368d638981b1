//! Lines of three cells: rows, columns, and diagonals.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::Tile;
use crate::core::{Player, Position};

/// Which diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagonal {
    /// (0,0) → (2,2)
    TopLeft,
    /// (0,2) → (2,0)
    TopRight,
}

/// A row, column, or diagonal. Used to report where a line was completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardStrip {
    Row(u8),
    Column(u8),
    Diagonal(Diagonal),
}

impl BoardStrip {
    /// All 8 strips: rows, then columns, then diagonals.
    pub const ALL: [BoardStrip; 8] = [
        BoardStrip::Row(0),
        BoardStrip::Row(1),
        BoardStrip::Row(2),
        BoardStrip::Column(0),
        BoardStrip::Column(1),
        BoardStrip::Column(2),
        BoardStrip::Diagonal(Diagonal::TopLeft),
        BoardStrip::Diagonal(Diagonal::TopRight),
    ];

    /// The three cells of this strip.
    #[must_use]
    pub fn positions(self) -> [Position; 3] {
        match self {
            BoardStrip::Row(r) => [0, 1, 2].map(|c| Position::new(r, c)),
            BoardStrip::Column(c) => [0, 1, 2].map(|r| Position::new(r, c)),
            BoardStrip::Diagonal(Diagonal::TopLeft) => [0, 1, 2].map(|i| Position::new(i, i)),
            BoardStrip::Diagonal(Diagonal::TopRight) => [0, 1, 2].map(|i| Position::new(i, 2 - i)),
        }
    }
}

impl std::fmt::Display for BoardStrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardStrip::Row(r) => write!(f, "row {r}"),
            BoardStrip::Column(c) => write!(f, "column {c}"),
            BoardStrip::Diagonal(Diagonal::TopLeft) => write!(f, "top-left diagonal"),
            BoardStrip::Diagonal(Diagonal::TopRight) => write!(f, "top-right diagonal"),
        }
    }
}

/// A borrowed view of the three tiles on one strip.
#[derive(Clone, Copy, Debug)]
pub struct Line<'a> {
    pub strip: BoardStrip,
    pub tiles: [&'a Tile; 3],
}

impl<'a> Line<'a> {
    /// Owners of the classical tiles on this line, in strip order.
    #[must_use]
    pub fn classical_players(&self) -> SmallVec<[Player; 3]> {
        self.tiles.iter().filter_map(|t| t.classical_player()).collect()
    }

    /// Number of classical tiles on this line.
    #[must_use]
    pub fn classical_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_classical()).count()
    }

    /// The completing player and the highest move index, if all three
    /// tiles are classical for one player.
    #[must_use]
    pub fn completed_by(&self) -> Option<(Player, u32)> {
        let mut owner = None;
        let mut latest = 0;

        for tile in self.tiles {
            let Tile::Classical { player, move_index } = tile else {
                return None;
            };
            match owner {
                None => owner = Some(*player),
                Some(p) if p != *player => return None,
                Some(_) => {}
            }
            latest = latest.max(*move_index);
        }

        owner.map(|p| (p, latest))
    }

    /// A line is open while its classical tiles (if any) share one owner.
    /// Contested lines can never be completed.
    #[must_use]
    pub fn is_open(&self) -> bool {
        let players = self.classical_players();
        players.windows(2).all(|w| w[0] == w[1])
    }

    /// The player with two classical tiles here while the third tile is
    /// still undecided: a line one collapse away from completion.
    #[must_use]
    pub fn threat(&self) -> Option<Player> {
        let players = self.classical_players();
        if players.len() == 2 && players[0] == players[1] {
            Some(players[0])
        } else {
            None
        }
    }
}

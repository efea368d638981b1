//! Running tally across the games of a session.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerMap};
use crate::rules::WinClassification;

/// Points per outcome: a single line is worth 1, two lines 1.5, and a
/// split result won on the tie-break 0.5.
#[must_use]
pub fn points_for(classification: WinClassification) -> Option<(Player, f64)> {
    match classification {
        WinClassification::Draw => None,
        WinClassification::Win(p) => Some((p, 1.0)),
        WinClassification::DoubleWin(p) => Some((p, 1.5)),
        WinClassification::NarrowWin(p) => Some((p, 0.5)),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    points: PlayerMap<f64>,
    wins: PlayerMap<u32>,
    draws: u32,
    games: u32,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one finished game.
    pub fn record(&mut self, classification: WinClassification) {
        self.games += 1;
        match points_for(classification) {
            Some((player, points)) => {
                self.points[player] += points;
                self.wins[player] += 1;
            }
            None => self.draws += 1,
        }
    }

    #[must_use]
    pub fn points(&self, player: Player) -> f64 {
        self.points[player]
    }

    /// Games won outright, doubly, or narrowly.
    #[must_use]
    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player]
    }

    #[must_use]
    pub fn draws(&self) -> u32 {
        self.draws
    }

    #[must_use]
    pub fn games(&self) -> u32 {
        self.games
    }

    /// The player with more points, `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<Player> {
        let (o, x) = (self.points[Player::O], self.points[Player::X]);
        if o > x {
            Some(Player::O)
        } else if x > o {
            Some(Player::X)
        } else {
            None
        }
    }
}

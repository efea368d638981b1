//! Win detection and tie-break classification.
//!
//! ## Detection
//!
//! A line wins when all three of its tiles are classical for the same
//! player. Lines are scanned rows first, then columns, then diagonals.
//!
//! ## Classification
//!
//! One collapse can complete several lines at once, possibly for both
//! players. `WinResult::classify` turns the raw set of lines into the
//! final outcome:
//!
//! | x wins | o wins | outcome                                   |
//! |--------|--------|-------------------------------------------|
//! | n ≥ 2  | 0      | `DoubleWin(X)`                            |
//! | n ≥ 2  | 1      | `NarrowWin(X)`                            |
//! | k      | k      | `NarrowWin` for the earliest-completed line |
//! | other  |        | `Draw`                                    |
//!
//! (and symmetrically for O).

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardStrip};
use crate::core::Player;

/// One completed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    pub player: Player,
    pub strip: BoardStrip,
    /// Highest move index among the three classical pieces of the line.
    pub move_index: u32,
}

/// Raw detection result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinResult {
    NoWin,
    Win(Win),
    /// Two or more completed lines.
    MultipleWins(Vec<Win>),
}

/// Final outcome of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinClassification {
    Draw,
    Win(Player),
    DoubleWin(Player),
    NarrowWin(Player),
}

/// Scan every line for a completed classical three-in-a-row.
#[must_use]
pub fn user_has_won(board: &Board) -> WinResult {
    let mut wins: Vec<Win> = board
        .slices()
        .iter()
        .filter_map(|line| {
            line.completed_by().map(|(player, move_index)| Win {
                player,
                strip: line.strip,
                move_index,
            })
        })
        .collect();

    match wins.len() {
        0 => WinResult::NoWin,
        1 => WinResult::Win(wins.remove(0)),
        _ => WinResult::MultipleWins(wins),
    }
}

impl WinResult {
    /// Completed lines, empty for `NoWin`.
    #[must_use]
    pub fn wins(&self) -> &[Win] {
        match self {
            WinResult::NoWin => &[],
            WinResult::Win(win) => std::slice::from_ref(win),
            WinResult::MultipleWins(wins) => wins,
        }
    }

    /// Check if at least one line is complete.
    #[must_use]
    pub fn is_win(&self) -> bool {
        !matches!(self, WinResult::NoWin)
    }

    /// Reduce the detected lines to a final outcome.
    ///
    /// Independent of the order in which lines were recorded.
    #[must_use]
    pub fn classify(&self) -> WinClassification {
        let wins = match self {
            WinResult::NoWin => return WinClassification::Draw,
            WinResult::Win(win) => return WinClassification::Win(win.player),
            WinResult::MultipleWins(wins) => wins,
        };

        let x = wins.iter().filter(|w| w.player == Player::X).count();
        let o = wins.len() - x;

        match (x, o) {
            (1, 0) => WinClassification::Win(Player::X),
            (0, 1) => WinClassification::Win(Player::O),
            (n, 0) if n >= 2 => WinClassification::DoubleWin(Player::X),
            (0, n) if n >= 2 => WinClassification::DoubleWin(Player::O),
            (n, 1) if n >= 2 => WinClassification::NarrowWin(Player::X),
            (1, n) if n >= 2 => WinClassification::NarrowWin(Player::O),
            (a, b) if a == b => earliest_owner(wins)
                .map_or(WinClassification::Draw, WinClassification::NarrowWin),
            _ => WinClassification::Draw,
        }
    }
}

/// Owner of the line completed first, or `None` when no line exists or
/// both players share the lowest move index.
fn earliest_owner(wins: &[Win]) -> Option<Player> {
    let min = wins.iter().map(|w| w.move_index).min()?;
    let mut owners = wins.iter().filter(|w| w.move_index == min).map(|w| w.player);
    let first = owners.next()?;
    owners.all(|p| p == first).then_some(first)
}

impl WinClassification {
    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            WinClassification::Draw => None,
            WinClassification::Win(p)
            | WinClassification::DoubleWin(p)
            | WinClassification::NarrowWin(p) => Some(*p),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner() == Some(player)
    }
}

impl std::fmt::Display for WinClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinClassification::Draw => write!(f, "draw"),
            WinClassification::Win(p) => write!(f, "{p} wins"),
            WinClassification::DoubleWin(p) => write!(f, "{p} wins twice"),
            WinClassification::NarrowWin(p) => write!(f, "{p} wins narrowly"),
        }
    }
}

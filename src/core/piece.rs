//! Quantum pieces.
//!
//! A quantum move places one labelled piece into two cells at once. The
//! label is the owning player plus the round number that placed it, so
//! the two marks of one move compare equal and no other mark does.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A labelled mark: the player and the round that placed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantumPiece {
    pub player: Player,
    pub move_index: u32,
}

impl QuantumPiece {
    /// Create a piece.
    #[must_use]
    pub const fn new(player: Player, move_index: u32) -> Self {
        Self { player, move_index }
    }
}

impl std::fmt::Display for QuantumPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            self.player.symbol().to_ascii_lowercase(),
            self.move_index
        )
    }
}

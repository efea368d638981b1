//! Cell contents.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, QuantumPiece};

/// Quantum marks held by one cell, in placement order.
///
/// SmallVec keeps the common case (up to four marks) off the heap.
pub type QuantumMarks = SmallVec<[QuantumPiece; 4]>;

/// What a cell holds.
///
/// A `Quantum` list is never empty, and a `Classical` tile never changes
/// again.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Classical { player: Player, move_index: u32 },
    Quantum(QuantumMarks),
}

impl Tile {
    /// Classical tile owned by the given piece.
    #[must_use]
    pub fn classical(piece: QuantumPiece) -> Self {
        Tile::Classical {
            player: piece.player,
            move_index: piece.move_index,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Tile::Empty)
    }

    #[must_use]
    pub fn is_classical(&self) -> bool {
        matches!(self, Tile::Classical { .. })
    }

    #[must_use]
    pub fn is_quantum(&self) -> bool {
        matches!(self, Tile::Quantum(_))
    }

    /// Owner of a classical tile.
    #[must_use]
    pub fn classical_player(&self) -> Option<Player> {
        match self {
            Tile::Classical { player, .. } => Some(*player),
            Tile::Empty | Tile::Quantum(_) => None,
        }
    }

    /// Move index of a classical tile.
    #[must_use]
    pub fn classical_move_index(&self) -> Option<u32> {
        match self {
            Tile::Classical { move_index, .. } => Some(*move_index),
            Tile::Empty | Tile::Quantum(_) => None,
        }
    }

    /// Quantum marks, or an empty slice for other tiles.
    #[must_use]
    pub fn quantum_marks(&self) -> &[QuantumPiece] {
        match self {
            Tile::Quantum(marks) => marks,
            Tile::Empty | Tile::Classical { .. } => &[],
        }
    }

    /// Check if this tile holds the given quantum mark.
    #[must_use]
    pub fn holds(&self, piece: QuantumPiece) -> bool {
        self.quantum_marks().contains(&piece)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tile::Empty => write!(f, "."),
            Tile::Classical { player, .. } => write!(f, "{player}"),
            Tile::Quantum(marks) => {
                for (i, mark) in marks.iter().enumerate() {
                    if i > 0 {
                        write!(f, "/")?;
                    }
                    write!(f, "{mark}")?;
                }
                Ok(())
            }
        }
    }
}

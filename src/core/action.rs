//! Move representation.
//!
//! One closed enum covers both kinds of turn:
//! - "Quantum" = one new piece placed into two cells
//! - "Classical" = resolve a cycle by naming the cell a piece collapses into
//!
//! Moves carry no player: the mover is implied by the round counter of the
//! state they are applied to.

use serde::{Deserialize, Serialize};

use super::piece::QuantumPiece;
use super::player::Player;
use super::position::Position;

/// A complete game move.
///
/// ## Example
///
/// ```
/// use quantum_ttt::core::{Move, Player, Position, QuantumPiece};
///
/// // Superpose the current player's next piece over two corners
/// let place = Move::Quantum(Position::new(0, 0), Position::new(2, 2));
///
/// // Collapse O's round-4 piece into the centre
/// let collapse = Move::Classical {
///     piece: QuantumPiece::new(Player::O, 4),
///     position: Position::new(1, 1),
/// };
///
/// assert!(place.is_quantum());
/// assert!(!collapse.is_quantum());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place one new quantum piece into two distinct non-classical cells.
    Quantum(Position, Position),
    /// Collapse `piece` into `position`, resolving the pending cycle.
    Classical { piece: QuantumPiece, position: Position },
}

impl Move {
    #[must_use]
    pub fn is_quantum(&self) -> bool {
        matches!(self, Move::Quantum(..))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Quantum(a, b) => write!(f, "quantum {a} + {b}"),
            Move::Classical { piece, position } => write!(f, "collapse {piece} at {position}"),
        }
    }
}

/// A recorded move with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made the move.
    pub player: Player,

    /// The move made.
    pub mv: Move,

    /// Round counter when the move was applied.
    pub round: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, mv: Move, round: u32) -> Self {
        Self { player, mv, round }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_equality() {
        let a = Move::Quantum(Position::new(0, 0), Position::new(1, 1));
        let b = Move::Quantum(Position::new(0, 0), Position::new(1, 1));
        let c = Move::Quantum(Position::new(1, 1), Position::new(0, 0));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_move_display() {
        let mv = Move::Classical {
            piece: QuantumPiece::new(Player::X, 3),
            position: Position::new(2, 0),
        };
        assert_eq!(format!("{mv}"), "collapse x3 at (2, 0)");
    }

    #[test]
    fn test_move_record_serialization() {
        let mv = Move::Quantum(Position::new(0, 1), Position::new(2, 2));
        let record = MoveRecord::new(Player::O, mv, 4);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}

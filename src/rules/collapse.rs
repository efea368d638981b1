//! Collapse propagation.
//!
//! Collapsing a piece into one cell makes that cell classical. Every other
//! mark that shared the cell is then forced into its partner cell, which
//! collapses in turn, until the whole entanglement component is classical.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::board::{Board, Tile};
use crate::core::{Player, Position, QuantumPiece, CELL_COUNT};

/// A cell that became classical during a collapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collapsed {
    pub position: Position,
    pub player: Player,
}

/// Cells in the order they became classical. At most one entry per cell.
pub type CollapseLog = SmallVec<[Collapsed; CELL_COUNT]>;

/// Collapse `piece` into `position` and propagate.
///
/// The tile at `position` must be quantum and hold `piece`; anything else
/// is a contract violation and panics. Always adds at least one classical
/// tile.
pub fn collapse(board: &mut Board, piece: QuantumPiece, position: Position) -> CollapseLog {
    assert!(
        board.get(position).holds(piece),
        "Cannot collapse {piece} at {position}: tile does not hold that quantum mark"
    );

    let mut log = CollapseLog::new();
    let mut visited = [false; CELL_COUNT];
    let mut pending: SmallVec<[(QuantumPiece, Position); CELL_COUNT]> = SmallVec::new();
    pending.push((piece, position));

    while let Some((piece, position)) = pending.pop() {
        if visited[position.index()] {
            continue;
        }
        let Tile::Quantum(marks) = board.get(position).clone() else {
            continue;
        };

        visited[position.index()] = true;
        board.set(position, Tile::classical(piece));
        log.push(Collapsed {
            position,
            player: piece.player,
        });

        // Reversed so the first mark is resolved first.
        for &other in marks.iter().rev() {
            if other == piece {
                continue;
            }
            if let Some(next) = board.other_location_of(other, position) {
                if board.get(next).is_quantum() {
                    pending.push((other, next));
                }
            }
        }
    }

    debug!(piece = %piece, position = %position, collapsed = log.len(), "collapse");
    log
}

//! Entanglement cycle detection.
//!
//! The board forms a multigraph: cells are vertices and every quantum
//! piece is an edge between its two cells. A cycle exists for a piece when
//! a trail (no edge used twice) leaves the piece's first cell along some
//! other piece and comes back to it.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::board::Board;
use crate::core::{Position, QuantumPiece};

/// Check if `seed` sits on a closed entanglement cycle.
///
/// Fails closed: returns false when the piece has no quantum location.
/// Neighbouring pieces without a second mark are skipped.
#[must_use]
pub fn cycles_present(board: &Board, seed: QuantumPiece) -> bool {
    let Some(&start) = board.locations_of(seed).first() else {
        return false;
    };

    let mut used = FxHashSet::default();
    let mut found = false;

    for &piece in board.get(start).quantum_marks() {
        if piece == seed {
            continue;
        }
        if follow(board, piece, start, start, &mut used) {
            found = true;
            break;
        }
    }

    debug!(piece = %seed, start = %start, found, "cycle check");
    found
}

/// Cross the edge `piece` out of `from` and keep walking until the trail
/// returns to `start` or runs out of unused edges.
fn follow(
    board: &Board,
    piece: QuantumPiece,
    from: Position,
    start: Position,
    used: &mut FxHashSet<QuantumPiece>,
) -> bool {
    let Some(next) = board.other_location_of(piece, from) else {
        return false;
    };
    if next == start {
        return true;
    }

    // Every edge can be crossed at most once per trail, which bounds the
    // depth by the number of quantum pieces on the board.
    used.insert(piece);
    let mut found = false;
    for &neighbour in board.get(next).quantum_marks() {
        if used.contains(&neighbour) {
            continue;
        }
        if follow(board, neighbour, next, start, used) {
            found = true;
            break;
        }
    }
    used.remove(&piece);

    found
}

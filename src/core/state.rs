//! Game state: board, round counter, pending entanglement, history.
//!
//! ## Rounds
//!
//! `count` numbers the rounds from 0. Even rounds belong to O, odd rounds
//! to X, and a quantum move placed in round `n` is labelled `n`. Applying
//! a move does not advance the round; the caller decides when the round is
//! over (`advance_round`), which lets the engine evaluate wins in between.
//!
//! ## Pending pair
//!
//! After a quantum move the two marks it placed are remembered. At the
//! start of the next round, if they closed a cycle, the mover must resolve
//! it with a classical move before anything else happens.
//!
//! ## Cloning
//!
//! The history is an `im::Vector`, so cloning a state for search copies a
//! 9-tile array and bumps a reference count.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::action::{Move, MoveRecord};
use super::piece::QuantumPiece;
use super::player::Player;
use super::position::Position;
use crate::board::Board;
use crate::rules::{self, CollapseLog};

/// Complete state of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,

    /// Round counter (starts at 0, O to move).
    count: u32,

    /// Marks placed by the most recent quantum move.
    pending_pair: Option<(QuantumPiece, QuantumPiece)>,

    /// Applied moves, oldest first.
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create the state for a fresh game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary board at the given round.
    ///
    /// No pending pair and an empty history. Useful for analysing
    /// positions that did not come from a recorded game.
    #[must_use]
    pub fn from_board(board: Board, count: u32) -> Self {
        Self {
            board,
            count,
            pending_pair: None,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current round number.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The player whose round it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        Player::for_round(self.count)
    }

    #[must_use]
    pub fn pending_pair(&self) -> Option<(QuantumPiece, QuantumPiece)> {
        self.pending_pair
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The collapse the current player owes, if the last quantum move
    /// closed a cycle: the pending piece and its two cells.
    #[must_use]
    pub fn pending_cycle(&self) -> Option<(QuantumPiece, [Position; 2])> {
        let (piece, _) = self.pending_pair?;
        if !rules::cycles_present(&self.board, piece) {
            return None;
        }
        match self.board.locations_of(piece).as_slice() {
            &[a, b] => Some((piece, [a, b])),
            _ => None,
        }
    }

    /// Apply a move for the current player.
    ///
    /// Returns the cells that became classical (empty for a quantum move).
    ///
    /// ## Panics
    ///
    /// - Quantum move naming the same cell twice, an out-of-range cell, or
    ///   a classical cell
    /// - Classical move whose piece is not a quantum mark at the position
    pub fn apply(&mut self, mv: Move) -> CollapseLog {
        let player = self.current_player();

        let collapsed = match mv {
            Move::Quantum(a, b) => {
                assert!(a.is_valid() && b.is_valid(), "Quantum move {mv} is off the board");
                assert!(a != b, "Quantum move must use two distinct cells, got {a} twice");

                let piece = QuantumPiece::new(player, self.count);
                self.board.place_quantum(a, piece);
                self.board.place_quantum(b, piece);
                self.pending_pair = Some((piece, piece));
                CollapseLog::new()
            }
            Move::Classical { piece, position } => {
                let collapsed = rules::collapse(&mut self.board, piece, position);
                self.pending_pair = None;
                collapsed
            }
        };

        trace!(%player, round = self.count, mv = %mv, "applied move");
        self.history.push_back(MoveRecord::new(player, mv, self.count));
        collapsed
    }

    /// End the current round; the other player moves next.
    pub fn advance_round(&mut self) {
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Tile;

    fn quantum(a: (u8, u8), b: (u8, u8)) -> Move {
        Move::Quantum(Position::new(a.0, a.1), Position::new(b.0, b.1))
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert_eq!(state.count(), 0);
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.pending_pair(), None);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_quantum_move_places_both_marks() {
        let mut state = GameState::new();

        let collapsed = state.apply(quantum((0, 0), (2, 2)));

        let piece = QuantumPiece::new(Player::O, 0);
        assert!(collapsed.is_empty());
        assert!(state.board().get(Position::new(0, 0)).holds(piece));
        assert!(state.board().get(Position::new(2, 2)).holds(piece));
        assert_eq!(state.pending_pair(), Some((piece, piece)));
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn test_advance_round_switches_player() {
        let mut state = GameState::new();
        state.apply(quantum((0, 0), (0, 1)));
        state.advance_round();

        assert_eq!(state.current_player(), Player::X);

        state.apply(quantum((0, 1), (0, 2)));

        let piece = QuantumPiece::new(Player::X, 1);
        assert!(state.board().get(Position::new(0, 2)).holds(piece));
    }

    #[test]
    fn test_pending_cycle_and_classical_move() {
        let mut state = GameState::new();
        state.apply(quantum((0, 0), (1, 1)));
        state.advance_round();
        assert_eq!(state.pending_cycle(), None);

        state.apply(quantum((0, 0), (1, 1)));
        state.advance_round();

        let x1 = QuantumPiece::new(Player::X, 1);
        let (piece, cells) = state.pending_cycle().unwrap();
        assert_eq!(piece, x1);
        assert_eq!(cells, [Position::new(0, 0), Position::new(1, 1)]);

        let collapsed = state.apply(Move::Classical {
            piece: x1,
            position: Position::new(1, 1),
        });

        assert_eq!(collapsed.len(), 2);
        assert_eq!(state.pending_pair(), None);
        assert_eq!(state.board().get(Position::new(1, 1)), &Tile::classical(x1));
        assert_eq!(
            state.board().get(Position::new(0, 0)),
            &Tile::classical(QuantumPiece::new(Player::O, 0))
        );
    }

    #[test]
    fn test_history_records_player_and_round() {
        let mut state = GameState::new();
        let first = quantum((0, 0), (0, 1));
        let second = quantum((1, 0), (1, 1));

        state.apply(first);
        state.advance_round();
        state.apply(second);

        let history: Vec<_> = state.history().iter().cloned().collect();
        assert_eq!(
            history,
            vec![
                MoveRecord::new(Player::O, first, 0),
                MoveRecord::new(Player::X, second, 1),
            ]
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = GameState::new();
        state.apply(quantum((0, 0), (0, 1)));

        let mut copy = state.clone();
        copy.advance_round();
        copy.apply(quantum((2, 0), (2, 1)));

        assert_eq!(state.history().len(), 1);
        assert!(state.board().get(Position::new(2, 0)).is_empty());
        assert_eq!(copy.history().len(), 2);
    }

    #[test]
    #[should_panic(expected = "two distinct cells")]
    fn test_quantum_same_cell_panics() {
        let mut state = GameState::new();
        state.apply(quantum((1, 1), (1, 1)));
    }

    #[test]
    #[should_panic(expected = "classical tile")]
    fn test_quantum_onto_classical_panics() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), Tile::classical(QuantumPiece::new(Player::X, 1)));
        let mut state = GameState::from_board(board, 2);

        state.apply(quantum((0, 0), (0, 1)));
    }

    #[test]
    #[should_panic(expected = "does not hold that quantum mark")]
    fn test_classical_without_mark_panics() {
        let mut state = GameState::new();
        state.apply(Move::Classical {
            piece: QuantumPiece::new(Player::O, 0),
            position: Position::new(0, 0),
        });
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::new();
        state.apply(quantum((0, 0), (2, 2)));

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}

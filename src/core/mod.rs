//! Core types: players, positions, pieces, moves, state, RNG.
//!
//! Everything the rules and the search share lives here. Values are small
//! and `Copy` where they can be; the only heap data in a `GameState` is the
//! persistent move history.

pub mod action;
pub mod piece;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord};
pub use piece::QuantumPiece;
pub use player::{Player, PlayerMap};
pub use position::{Position, BOARD_SIDE, CELL_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;

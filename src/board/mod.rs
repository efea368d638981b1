//! The 3×3 board: tiles, lines, and geometric queries.
//!
//! The board is a pure container. It knows where marks are and which
//! lines exist, but not whose turn it is or how cycles resolve; that lives
//! in `rules` and `engine`.

pub mod grid;
pub mod strip;
pub mod tile;

pub use grid::Board;
pub use strip::{BoardStrip, Diagonal, Line};
pub use tile::{QuantumMarks, Tile};

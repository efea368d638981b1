//! Board coordinates.
//!
//! ## Layout
//!
//! Cells are addressed by `(row, col)`, both in `0..3`. Internally the
//! board is a flat arena of 9 cells indexed `row * 3 + col`:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIDE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// A cell on the 3×3 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position.
    ///
    /// Panics if either coordinate is off the board. Use [`Position::checked`]
    /// for untrusted input.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIDE && (col as usize) < BOARD_SIDE,
            "Position out of range"
        );
        Self { row, col }
    }

    /// Create a position if both coordinates are on the board.
    #[must_use]
    pub const fn checked(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIDE && (col as usize) < BOARD_SIDE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Position for a flat cell index in `0..9`.
    ///
    /// ```
    /// use quantum_ttt::core::Position;
    ///
    /// assert_eq!(Position::from_index(5), Position::new(1, 2));
    /// assert_eq!(Position::new(2, 0).index(), 6);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < CELL_COUNT, "Cell index out of range");
        Self {
            row: (index / BOARD_SIDE) as u8,
            col: (index % BOARD_SIDE) as u8,
        }
    }

    /// Flat cell index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIDE + self.col as usize
    }

    /// Check if the coordinates lie on the board.
    ///
    /// Always true for positions built through `new`, `from_index`, or
    /// `checked`; deserialized or struct-literal positions may fail.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.row as usize) < BOARD_SIDE && (self.col as usize) < BOARD_SIDE
    }

    /// All 9 positions in flat index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(Position::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

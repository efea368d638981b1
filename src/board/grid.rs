//! The 3×3 grid and its geometric queries.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::strip::{BoardStrip, Diagonal, Line};
use super::tile::Tile;
use crate::core::{Player, Position, QuantumPiece, CELL_COUNT};

/// The game board: a flat arena of 9 tiles indexed by `Position::index`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Tile; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the tile at a position.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> &Tile {
        &self.cells[pos.index()]
    }

    /// Replace the tile at a position.
    ///
    /// Panics when overwriting a classical tile, or when setting an empty
    /// quantum list.
    pub fn set(&mut self, pos: Position, tile: Tile) {
        assert!(
            !self.cells[pos.index()].is_classical(),
            "Classical tile at {pos} cannot be replaced"
        );
        if let Tile::Quantum(marks) = &tile {
            assert!(!marks.is_empty(), "Quantum tile at {pos} must hold at least one mark");
        }
        self.cells[pos.index()] = tile;
    }

    /// All tiles in flat index order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile; CELL_COUNT] {
        &self.cells
    }

    /// Append a quantum mark to a cell.
    ///
    /// An empty cell becomes a one-mark quantum tile. Panics on a classical
    /// cell.
    pub fn place_quantum(&mut self, pos: Position, piece: QuantumPiece) {
        match &mut self.cells[pos.index()] {
            Tile::Classical { .. } => {
                panic!("Cannot place {piece} on classical tile at {pos}")
            }
            Tile::Quantum(marks) => marks.push(piece),
            cell @ Tile::Empty => *cell = Tile::Quantum(smallvec::smallvec![piece]),
        }
    }

    /// Cells whose quantum list contains this exact piece, in index order.
    #[must_use]
    pub fn locations_of(&self, piece: QuantumPiece) -> SmallVec<[Position; 2]> {
        Position::all().filter(|&pos| self.get(pos).holds(piece)).collect()
    }

    /// The piece's other mark: a quantum location of `piece` that is not
    /// `excluding`.
    #[must_use]
    pub fn other_location_of(&self, piece: QuantumPiece, excluding: Position) -> Option<Position> {
        Position::all().find(|&pos| pos != excluding && self.get(pos).holds(piece))
    }

    /// Borrow the tiles on one strip.
    #[must_use]
    pub fn line(&self, strip: BoardStrip) -> Line<'_> {
        let [a, b, c] = strip.positions();
        Line {
            strip,
            tiles: [self.get(a), self.get(b), self.get(c)],
        }
    }

    /// Rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> [Line<'_>; 3] {
        [0, 1, 2].map(|r| self.line(BoardStrip::Row(r)))
    }

    /// Columns, left to right.
    #[must_use]
    pub fn columns(&self) -> [Line<'_>; 3] {
        [0, 1, 2].map(|c| self.line(BoardStrip::Column(c)))
    }

    /// Top-left then top-right diagonal.
    #[must_use]
    pub fn diagonals(&self) -> [Line<'_>; 2] {
        [Diagonal::TopLeft, Diagonal::TopRight].map(|d| self.line(BoardStrip::Diagonal(d)))
    }

    /// Every line: rows, then columns, then diagonals.
    #[must_use]
    pub fn slices(&self) -> [Line<'_>; 8] {
        BoardStrip::ALL.map(|strip| self.line(strip))
    }

    /// Number of classical tiles.
    #[must_use]
    pub fn classical_count(&self) -> usize {
        self.cells.iter().filter(|t| t.is_classical()).count()
    }

    /// Number of classical tiles owned by a player.
    #[must_use]
    pub fn classical_count_for(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|t| t.classical_player() == Some(player))
            .count()
    }

    /// Cells that can still take a quantum mark.
    pub fn open_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|&pos| !self.get(pos).is_classical())
    }

    /// Check if play can no longer change the outcome.
    ///
    /// True when fewer than two non-classical cells remain (no quantum move
    /// fits) or when every line is contested by both players.
    #[must_use]
    pub fn cannot_win(&self) -> bool {
        if self.open_positions().count() < 2 {
            return true;
        }
        !self.slices().iter().any(Line::is_open)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.tiles.iter().map(|t| t.to_string()).collect();
            write!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(player: Player, n: u32) -> QuantumPiece {
        QuantumPiece::new(player, n)
    }

    fn set_classical(board: &mut Board, row: u8, col: u8, player: Player, n: u32) {
        board.set(Position::new(row, col), Tile::classical(piece(player, n)));
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.tiles().iter().all(Tile::is_empty));
        assert_eq!(board.classical_count(), 0);
    }

    #[test]
    fn test_place_quantum_appends_in_order() {
        let mut board = Board::new();
        let pos = Position::new(1, 1);

        board.place_quantum(pos, piece(Player::O, 0));
        board.place_quantum(pos, piece(Player::X, 1));

        assert_eq!(
            board.get(pos).quantum_marks(),
            &[piece(Player::O, 0), piece(Player::X, 1)]
        );
    }

    #[test]
    #[should_panic(expected = "classical tile")]
    fn test_place_quantum_on_classical_panics() {
        let mut board = Board::new();
        set_classical(&mut board, 0, 0, Player::X, 1);
        board.place_quantum(Position::new(0, 0), piece(Player::O, 2));
    }

    #[test]
    #[should_panic(expected = "cannot be replaced")]
    fn test_set_over_classical_panics() {
        let mut board = Board::new();
        set_classical(&mut board, 0, 0, Player::X, 1);
        board.set(Position::new(0, 0), Tile::Empty);
    }

    #[test]
    fn test_locations_and_other_location() {
        let mut board = Board::new();
        let p = piece(Player::O, 0);
        let a = Position::new(0, 2);
        let b = Position::new(2, 1);

        board.place_quantum(b, p);
        board.place_quantum(a, p);

        assert_eq!(board.locations_of(p).as_slice(), &[a, b]);
        assert_eq!(board.other_location_of(p, a), Some(b));
        assert_eq!(board.other_location_of(p, b), Some(a));
        assert_eq!(board.other_location_of(piece(Player::X, 9), a), None);
    }

    #[test]
    fn test_slices_order() {
        let board = Board::new();
        let strips: Vec<_> = board.slices().iter().map(|l| l.strip).collect();
        assert_eq!(strips, BoardStrip::ALL.to_vec());
        assert_eq!(board.rows().len(), 3);
        assert_eq!(board.columns().len(), 3);
        assert_eq!(board.diagonals().len(), 2);
    }

    #[test]
    fn test_cannot_win_empty_board() {
        assert!(!Board::new().cannot_win());
    }

    #[test]
    fn test_cannot_win_on_drawn_board() {
        // X O X
        // X O O
        // O X .
        let mut board = Board::new();
        set_classical(&mut board, 0, 0, Player::X, 1);
        set_classical(&mut board, 0, 1, Player::O, 2);
        set_classical(&mut board, 0, 2, Player::X, 3);
        set_classical(&mut board, 1, 0, Player::X, 5);
        set_classical(&mut board, 1, 1, Player::O, 4);
        set_classical(&mut board, 1, 2, Player::O, 6);
        set_classical(&mut board, 2, 0, Player::O, 8);
        set_classical(&mut board, 2, 1, Player::X, 7);

        assert!(board.cannot_win());
    }

    #[test]
    fn test_can_win_while_lines_stay_open() {
        // X O X
        // O X O
        // . . .   (row 2 and both diagonals stay open)
        let mut board = Board::new();
        set_classical(&mut board, 0, 0, Player::X, 1);
        set_classical(&mut board, 0, 1, Player::O, 2);
        set_classical(&mut board, 0, 2, Player::X, 3);
        set_classical(&mut board, 1, 0, Player::O, 4);
        set_classical(&mut board, 1, 1, Player::X, 5);
        set_classical(&mut board, 1, 2, Player::O, 6);

        assert!(!board.cannot_win());
    }

    #[test]
    fn test_cannot_win_with_single_open_cell() {
        let mut board = Board::new();
        let owners = [
            Player::X, Player::O, Player::X,
            Player::X, Player::O, Player::O,
            Player::O, Player::X,
        ];
        for (i, owner) in owners.iter().enumerate() {
            let pos = Position::from_index(i);
            set_classical(&mut board, pos.row, pos.col, *owner, i as u32);
        }

        assert_eq!(board.open_positions().count(), 1);
        assert!(board.cannot_win());
    }

    #[test]
    fn test_classical_counts() {
        let mut board = Board::new();
        set_classical(&mut board, 0, 0, Player::X, 1);
        set_classical(&mut board, 1, 1, Player::X, 3);
        set_classical(&mut board, 2, 2, Player::O, 2);

        assert_eq!(board.classical_count(), 3);
        assert_eq!(board.classical_count_for(Player::X), 2);
        assert_eq!(board.classical_count_for(Player::O), 1);
        assert_eq!(board.open_positions().count(), 6);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        set_classical(&mut board, 0, 0, Player::X, 1);
        board.place_quantum(Position::new(1, 1), piece(Player::O, 0));
        board.place_quantum(Position::new(1, 1), piece(Player::X, 3));

        assert_eq!(format!("{board}"), "X | . | .\n. | o0/x3 | .\n. | . | .");
    }
}

//! Move generation and position scoring for `GameState`.
//!
//! ## Move generation
//!
//! - Decided positions (a completed line, or `cannot_win`) have no moves.
//! - A pending cycle leaves exactly two moves: collapse the pending piece
//!   into either of its cells.
//! - Otherwise every unordered pair of non-classical cells, in flat index
//!   order (36 on an empty board).
//!
//! ## Scoring
//!
//! Decided positions score by outcome. Open positions score by threats:
//! lines holding two classical tiles of one player and an undecided third.
//! With no threats on the board, the classical material balance decides.

use smallvec::SmallVec;

use super::model::SearchModel;
use crate::core::{GameState, Move, Player, Position, CELL_COUNT};
use crate::rules::{self, WinClassification};

/// Score of a single completed line.
pub const WIN_SCORE: i32 = 100;
/// Score of two or more lines for one player.
pub const DOUBLE_WIN_SCORE: i32 = 150;
/// Score of a split result won on the tie-break.
pub const NARROW_WIN_SCORE: i32 = 90;

/// The final classification, if the position is decided.
#[must_use]
pub fn decided(state: &GameState) -> Option<WinClassification> {
    let board = state.board();
    let result = rules::user_has_won(board);
    if result.is_win() || board.cannot_win() {
        Some(result.classify())
    } else {
        None
    }
}

/// Candidate moves for the player whose round it is.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    if decided(state).is_some() {
        return Vec::new();
    }

    if let Some((piece, cells)) = state.pending_cycle() {
        return cells
            .iter()
            .map(|&position| Move::Classical { piece, position })
            .collect();
    }

    let open: SmallVec<[Position; CELL_COUNT]> = state.board().open_positions().collect();
    let mut moves = Vec::with_capacity(open.len() * open.len().saturating_sub(1) / 2);
    for (i, &a) in open.iter().enumerate() {
        for &b in &open[i + 1..] {
            moves.push(Move::Quantum(a, b));
        }
    }
    moves
}

/// Evaluate the position from `player`'s point of view.
#[must_use]
pub fn score(state: &GameState, player: Player) -> i32 {
    if let Some(classification) = decided(state) {
        return outcome_score(classification, player);
    }

    let board = state.board();
    let (mut wins, mut loses) = (0u32, 0u32);
    for line in board.slices() {
        match line.threat() {
            Some(p) if p == player => wins += 1,
            Some(_) => loses += 1,
            None => {}
        }
    }

    match (wins, loses) {
        (1, 0) => 60,
        (2, 0) => 70,
        (0, 1) => -70,
        (0, 2) => -80,
        (1, 2) => -30,
        (2, 1) => 30,
        (1, 1) => -10,
        (w, l) if w > l => 40,
        (w, l) if l > w => -40,
        _ => material_score(state, player),
    }
}

fn outcome_score(classification: WinClassification, player: Player) -> i32 {
    let (winner, magnitude) = match classification {
        WinClassification::Draw => return 0,
        WinClassification::Win(p) => (p, WIN_SCORE),
        WinClassification::DoubleWin(p) => (p, DOUBLE_WIN_SCORE),
        WinClassification::NarrowWin(p) => (p, NARROW_WIN_SCORE),
    };
    if winner == player {
        magnitude
    } else {
        -magnitude
    }
}

/// Small bias towards owning more classical tiles, growing as the board
/// fills. Bounded by 5, well below any threat score.
fn material_score(state: &GameState, player: Player) -> i32 {
    let board = state.board();
    let own = board.classical_count_for(player) as i32;
    let opp = board.classical_count_for(player.other()) as i32;
    (own - opp).signum() * ((own + opp) * 5 / CELL_COUNT as i32)
}

impl SearchModel for GameState {
    type Move = Move;

    fn current_player(&self) -> Player {
        GameState::current_player(self)
    }

    fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    fn apply(&mut self, mv: Move) {
        GameState::apply(self, mv);
        self.advance_round();
    }

    fn score(&self, player: Player) -> i32 {
        score(self, player)
    }
}

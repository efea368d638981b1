//! Players that answer engine requests.

use std::collections::VecDeque;

use crate::core::{GameRng, GameState, Move, Position};
use crate::search::{Minimax, SearchConfig};

/// Answers placement and collapse requests for one seat.
///
/// Returning `None` forfeits the request; the session reports it as an
/// error instead of guessing a move.
pub trait Agent {
    /// Two cells for the next quantum piece.
    fn choose_placement(&mut self, state: &GameState, rng: &mut GameRng) -> Option<(Position, Position)>;

    /// One of `between` for the pending piece to collapse into.
    fn choose_collapse(
        &mut self,
        state: &GameState,
        between: [Position; 2],
        rng: &mut GameRng,
    ) -> Option<Position>;
}

/// The computer player: asks minimax for every decision.
#[derive(Clone, Debug, Default)]
pub struct SearchAgent {
    search: Minimax,
}

impl SearchAgent {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: Minimax::new(config),
        }
    }

    #[must_use]
    pub fn search(&self) -> &Minimax {
        &self.search
    }
}

impl Agent for SearchAgent {
    fn choose_placement(&mut self, state: &GameState, rng: &mut GameRng) -> Option<(Position, Position)> {
        match self.search.search(state, rng).best_move? {
            Move::Quantum(a, b) => Some((a, b)),
            Move::Classical { .. } => None,
        }
    }

    fn choose_collapse(
        &mut self,
        state: &GameState,
        between: [Position; 2],
        rng: &mut GameRng,
    ) -> Option<Position> {
        match self.search.search(state, rng).best_move? {
            Move::Classical { position, .. } if between.contains(&position) => Some(position),
            _ => None,
        }
    }
}

/// Plays a fixed list of moves in order. For replays and tests.
///
/// A placement request consumes the next `Quantum` move and a collapse
/// request the next `Classical` one; a mismatch or an empty script
/// forfeits.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    moves: VecDeque<Move>,
}

impl ScriptedAgent {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not played yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Agent for ScriptedAgent {
    fn choose_placement(&mut self, _state: &GameState, _rng: &mut GameRng) -> Option<(Position, Position)> {
        match self.moves.pop_front()? {
            Move::Quantum(a, b) => Some((a, b)),
            Move::Classical { .. } => None,
        }
    }

    fn choose_collapse(
        &mut self,
        _state: &GameState,
        _between: [Position; 2],
        _rng: &mut GameRng,
    ) -> Option<Position> {
        match self.moves.pop_front()? {
            Move::Classical { position, .. } => Some(position),
            Move::Quantum(..) => None,
        }
    }
}

//! The turn state machine.
//!
//! ## Round cycle
//!
//! ```text
//! begin_turn ──► AwaitingQuantumMove ──complete_placement──┐
//!      │                                                   ▼
//!      └──────► AwaitingCollapseChoice ──complete_collapse──► RoundResolving
//!                                                           │
//!               GameOver ◄── win or cannot_win ─────────────┤
//!               begin_turn ◄── otherwise ───────────────────┘
//! ```
//!
//! A turn starts in `AwaitingCollapseChoice` when the previous quantum move
//! closed a cycle; the player whose round it is picks the collapse.

use tracing::{debug, info};

use super::error::TurnError;
use super::phase::TurnPhase;
use super::presenter::Presenter;
use crate::core::{GameState, Move, Position};
use crate::rules::{self, WinClassification, WinResult};

/// Drives one game: validates answers, applies moves, scores rounds.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    state: GameState,
    phase: TurnPhase,
    result: Option<WinResult>,
}

impl GameEngine {
    /// Engine for a fresh game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine resuming from an existing state.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            phase: TurnPhase::NotStarted,
            result: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Final classification once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<WinClassification> {
        match self.phase {
            TurnPhase::GameOver(classification) => Some(classification),
            _ => None,
        }
    }

    /// The raw lines behind the final classification.
    #[must_use]
    pub fn win_result(&self) -> Option<&WinResult> {
        self.result.as_ref()
    }

    /// Start the game and issue the first request.
    ///
    /// A state that is already decided goes straight to `GameOver`.
    pub fn start(&mut self, presenter: &mut dyn Presenter) {
        debug!(round = self.state.count(), "game started");
        let result = rules::user_has_won(self.state.board());
        if result.is_win() || self.state.board().cannot_win() {
            self.finish(result, presenter);
        } else {
            self.begin_turn(presenter);
        }
    }

    /// Issue the request for the current round.
    pub fn begin_turn(&mut self, presenter: &mut dyn Presenter) {
        if self.phase.is_over() {
            return;
        }

        let player = self.state.current_player();
        if let Some((piece, between)) = self.state.pending_cycle() {
            debug!(%player, %piece, "cycle closed, collapse required");
            self.phase = TurnPhase::AwaitingCollapseChoice {
                player,
                piece,
                between,
            };
            presenter.request_collapse_choice(between, player);
        } else {
            self.phase = TurnPhase::AwaitingQuantumMove { player };
            presenter.request_quantum_placement(player);
        }
    }

    /// Answer an outstanding placement request.
    pub fn complete_placement(
        &mut self,
        a: Position,
        b: Position,
        presenter: &mut dyn Presenter,
    ) -> Result<(), TurnError> {
        match self.phase {
            TurnPhase::AwaitingQuantumMove { .. } => {}
            TurnPhase::GameOver(_) => return Err(TurnError::GameOver),
            TurnPhase::NotStarted => return Err(TurnError::NotStarted),
            TurnPhase::AwaitingCollapseChoice { .. } | TurnPhase::RoundResolving => {
                return Err(TurnError::NoPlacementRequested)
            }
        }

        for position in [a, b] {
            if !position.is_valid() {
                return Err(TurnError::OutOfRange { position });
            }
            if self.state.board().get(position).is_classical() {
                return Err(TurnError::CellClassical { position });
            }
        }
        if a == b {
            return Err(TurnError::SameCell { position: a });
        }

        self.phase = TurnPhase::RoundResolving;
        self.state.apply(Move::Quantum(a, b));
        self.resolve_round(presenter);
        Ok(())
    }

    /// Answer an outstanding collapse request.
    pub fn complete_collapse(
        &mut self,
        position: Position,
        presenter: &mut dyn Presenter,
    ) -> Result<(), TurnError> {
        let (piece, between) = match self.phase {
            TurnPhase::AwaitingCollapseChoice { piece, between, .. } => (piece, between),
            TurnPhase::GameOver(_) => return Err(TurnError::GameOver),
            TurnPhase::NotStarted => return Err(TurnError::NotStarted),
            TurnPhase::AwaitingQuantumMove { .. } | TurnPhase::RoundResolving => {
                return Err(TurnError::NoCollapseRequested)
            }
        };

        if !between.contains(&position) {
            return Err(TurnError::NotOffered { position, between });
        }

        self.phase = TurnPhase::RoundResolving;
        let collapsed = self.state.apply(Move::Classical { piece, position });
        for cell in &collapsed {
            presenter.notify_tile_collapsed(cell.position, cell.player);
        }
        self.resolve_round(presenter);
        Ok(())
    }

    /// Answer whichever request is outstanding with a full move.
    ///
    /// A classical move must name the pending piece.
    pub fn submit(&mut self, mv: Move, presenter: &mut dyn Presenter) -> Result<(), TurnError> {
        match mv {
            Move::Quantum(a, b) => self.complete_placement(a, b, presenter),
            Move::Classical { piece, position } => {
                if let TurnPhase::AwaitingCollapseChoice { piece: expected, .. } = self.phase {
                    if expected != piece {
                        return Err(TurnError::WrongPiece { expected, got: piece });
                    }
                }
                self.complete_collapse(position, presenter)
            }
        }
    }

    fn resolve_round(&mut self, presenter: &mut dyn Presenter) {
        self.state.advance_round();

        let result = rules::user_has_won(self.state.board());
        for win in result.wins() {
            presenter.notify_winning_strip(win.strip);
        }

        if result.is_win() || self.state.board().cannot_win() {
            self.finish(result, presenter);
        } else {
            self.begin_turn(presenter);
        }
    }

    fn finish(&mut self, result: WinResult, presenter: &mut dyn Presenter) {
        let classification = result.classify();
        info!(%classification, rounds = self.state.count(), "game over");

        self.result = Some(result);
        self.phase = TurnPhase::GameOver(classification);
        presenter.notify_game_result(classification);
    }
}

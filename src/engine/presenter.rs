//! The presentation seam.
//!
//! The engine never waits on a presenter. Requests are fire-and-forget; the
//! answer comes back later through `GameEngine::complete_placement` or
//! `GameEngine::complete_collapse`. Notifications are purely informational.

use serde::{Deserialize, Serialize};

use crate::board::BoardStrip;
use crate::core::{Player, Position};
use crate::rules::WinClassification;

/// Receives requests and notifications from the engine.
pub trait Presenter {
    /// Ask `player` for two cells to place a quantum piece into.
    fn request_quantum_placement(&mut self, player: Player);

    /// Ask `player` which of two cells the pending piece collapses into.
    fn request_collapse_choice(&mut self, between: [Position; 2], player: Player);

    /// A cell became classical.
    fn notify_tile_collapsed(&mut self, position: Position, player: Player);

    /// A line was completed.
    fn notify_winning_strip(&mut self, strip: BoardStrip);

    /// The game ended.
    fn notify_game_result(&mut self, result: WinClassification);
}

/// Ignores everything. For headless play and search-driven games.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn request_quantum_placement(&mut self, _player: Player) {}
    fn request_collapse_choice(&mut self, _between: [Position; 2], _player: Player) {}
    fn notify_tile_collapsed(&mut self, _position: Position, _player: Player) {}
    fn notify_winning_strip(&mut self, _strip: BoardStrip) {}
    fn notify_game_result(&mut self, _result: WinClassification) {}
}

/// One call received by a `RecordingPresenter`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenterEvent {
    QuantumPlacementRequested(Player),
    CollapseChoiceRequested { between: [Position; 2], player: Player },
    TileCollapsed { position: Position, player: Player },
    WinningStrip(BoardStrip),
    GameResult(WinClassification),
}

/// Keeps every call in order. Used by tests and replays.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    events: Vec<PresenterEvent>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<PresenterEvent> {
        std::mem::take(&mut self.events)
    }

    /// The most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&PresenterEvent> {
        self.events.last()
    }
}

impl Presenter for RecordingPresenter {
    fn request_quantum_placement(&mut self, player: Player) {
        self.events.push(PresenterEvent::QuantumPlacementRequested(player));
    }

    fn request_collapse_choice(&mut self, between: [Position; 2], player: Player) {
        self.events
            .push(PresenterEvent::CollapseChoiceRequested { between, player });
    }

    fn notify_tile_collapsed(&mut self, position: Position, player: Player) {
        self.events.push(PresenterEvent::TileCollapsed { position, player });
    }

    fn notify_winning_strip(&mut self, strip: BoardStrip) {
        self.events.push(PresenterEvent::WinningStrip(strip));
    }

    fn notify_game_result(&mut self, result: WinClassification) {
        self.events.push(PresenterEvent::GameResult(result));
    }
}

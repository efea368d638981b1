//! Turn phases.

use serde::{Deserialize, Serialize};

use crate::core::{Player, Position, QuantumPiece};
use crate::rules::WinClassification;

/// Where the engine is in the round cycle.
///
/// Exactly one request is outstanding in each `Awaiting*` phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Created but `start` not called yet.
    #[default]
    NotStarted,
    /// Waiting for `player` to name two cells.
    AwaitingQuantumMove { player: Player },
    /// Waiting for `player` to pick which of `between` the pending piece
    /// collapses into.
    AwaitingCollapseChoice {
        player: Player,
        piece: QuantumPiece,
        between: [Position; 2],
    },
    /// A move was applied and the round is being scored.
    RoundResolving,
    GameOver(WinClassification),
}

impl TurnPhase {
    /// The player an answer is expected from.
    #[must_use]
    pub fn awaiting(&self) -> Option<Player> {
        match self {
            TurnPhase::AwaitingQuantumMove { player }
            | TurnPhase::AwaitingCollapseChoice { player, .. } => Some(*player),
            TurnPhase::NotStarted | TurnPhase::RoundResolving | TurnPhase::GameOver(_) => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, TurnPhase::GameOver(_))
    }
}

//! Errors for answers coming back from the presentation layer.

use thiserror::Error;

use crate::core::{Position, QuantumPiece};

/// Why an answer to an engine request was rejected.
///
/// A rejected answer changes nothing: the same request stays outstanding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TurnError {
    #[error("game already over")]
    GameOver,

    #[error("game has not started")]
    NotStarted,

    #[error("no quantum placement was requested")]
    NoPlacementRequested,

    #[error("no collapse choice was requested")]
    NoCollapseRequested,

    #[error("position {position} is off the board")]
    OutOfRange { position: Position },

    #[error("both marks of a quantum move were placed on {position}")]
    SameCell { position: Position },

    #[error("position {position} is already classical")]
    CellClassical { position: Position },

    #[error("position {position} is not one of the offered cells {between:?}")]
    NotOffered {
        position: Position,
        between: [Position; 2],
    },

    #[error("collapse names {got}, but the pending piece is {expected}")]
    WrongPiece {
        expected: QuantumPiece,
        got: QuantumPiece,
    },
}

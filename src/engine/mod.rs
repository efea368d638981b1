//! Game engine: turn sequencing between the rules and a presenter.
//!
//! ## Usage
//!
//! ```rust
//! use quantum_ttt::core::{Player, Position};
//! use quantum_ttt::engine::{GameEngine, RecordingPresenter, TurnPhase};
//!
//! let mut engine = GameEngine::new();
//! let mut presenter = RecordingPresenter::new();
//!
//! engine.start(&mut presenter);
//! assert_eq!(engine.phase(), TurnPhase::AwaitingQuantumMove { player: Player::O });
//!
//! engine
//!     .complete_placement(Position::new(0, 0), Position::new(2, 2), &mut presenter)
//!     .unwrap();
//! assert_eq!(engine.phase().awaiting(), Some(Player::X));
//! ```

pub mod error;
pub mod game;
pub mod phase;
pub mod presenter;

pub use error::TurnError;
pub use game::GameEngine;
pub use phase::TurnPhase;
pub use presenter::{NullPresenter, Presenter, PresenterEvent, RecordingPresenter};

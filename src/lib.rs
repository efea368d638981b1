//! # quantum-ttt
//!
//! Rules engine and minimax search for Quantum Tic-Tac-Toe.
//!
//! A turn places one labelled piece into two cells at once. When a
//! placement closes a cycle of entangled cells, the next player picks which
//! of the two cells the piece really occupies, and every cell entangled
//! with it collapses in a chain. Wins are only counted on classical
//! (collapsed) tiles.
//!
//! ## Design Principles
//!
//! 1. **Rules are functions**: cycle detection, collapse, and win
//!    evaluation are free functions over a `Board`. The engine and the
//!    search share them.
//!
//! 2. **Closed types**: tiles, moves, results, and phases are exhaustive
//!    enums; players are `O` and `X` and nothing else.
//!
//! 3. **Explicit randomness**: the only RNG is a seeded `GameRng` owned by
//!    the session and passed where it is needed.
//!
//! ## Architecture
//!
//! - **Request/completion engine**: `GameEngine` asks a `Presenter` for an
//!   answer and returns immediately; the answer arrives through
//!   `complete_placement` / `complete_collapse`, validated before use.
//!
//! - **Cheap snapshots**: `GameState` is a 9-tile array plus an `im`
//!   history, so the search clones it freely.
//!
//! ## Modules
//!
//! - `core`: players, positions, pieces, moves, state, RNG
//! - `board`: tiles, lines, and the 3×3 grid
//! - `rules`: cycle detection, collapse, win evaluation
//! - `engine`: turn state machine and the presenter seam
//! - `search`: search model, move generation, scoring, minimax
//! - `session`: agents, AI seat, scoreboard, whole-game driver
//!
//! ## Logging
//!
//! The crate emits `tracing` events and never installs a subscriber.

pub mod board;
pub mod core;
pub mod engine;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState, GameState, Move, MoveRecord, Player, PlayerMap, Position,
    QuantumPiece,
};

pub use crate::board::{Board, BoardStrip, Diagonal, Line, Tile};

pub use crate::rules::{
    collapse, cycles_present, user_has_won, Collapsed, Win, WinClassification, WinResult,
};

pub use crate::engine::{
    GameEngine, NullPresenter, Presenter, PresenterEvent, RecordingPresenter, TurnError,
    TurnPhase,
};

pub use crate::search::{
    spawn_search, Minimax, SearchConfig, SearchModel, SearchOutcome, SearchStats, TieBreak,
};

pub use crate::session::{
    Agent, AiSeat, GameRecord, ScriptedAgent, SearchAgent, Scoreboard, Session, SessionConfig,
    SessionError,
};

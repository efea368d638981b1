//! Adversarial search for the computer player.
//!
//! ## Overview
//!
//! - **`SearchModel`**: what the search needs from a game position
//! - **`adapter`**: move generation and scoring for `GameState`
//! - **`Minimax`**: depth-limited minimax with alpha-beta pruning and a
//!   seeded tie-break
//! - **`spawn_search`**: the same search on a worker thread
//!
//! ## Usage
//!
//! ```rust
//! use quantum_ttt::core::{GameRng, GameState};
//! use quantum_ttt::search::{Minimax, SearchConfig};
//!
//! let state = GameState::new();
//! let mut rng = GameRng::new(42);
//! let mut search = Minimax::new(SearchConfig::default().with_max_depth(2));
//!
//! let outcome = search.search(&state, &mut rng);
//! assert!(outcome.best_move.is_some());
//! ```

pub mod adapter;
pub mod config;
pub mod minimax;
pub mod model;
pub mod stats;

pub use adapter::{decided, legal_moves, score};
pub use config::{SearchConfig, TieBreak};
pub use minimax::{spawn_search, Minimax, SearchOutcome};
pub use model::SearchModel;
pub use stats::SearchStats;

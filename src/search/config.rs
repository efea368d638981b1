//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// How to choose between root moves that share the best score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TieBreak {
    /// Uniformly at random with the caller's RNG.
    #[default]
    Random,
    /// The first in enumeration order.
    First,
}

/// Minimax configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies to look ahead (default: 3, minimum 1).
    /// Every ply is one round: a placement or a collapse.
    pub max_depth: u32,

    /// Rule for equally scored root moves.
    pub tie_break: TieBreak,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            tie_break: TieBreak::Random,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom look-ahead.
    ///
    /// Depths below 1 are raised to 1.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Create a new config with a custom tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

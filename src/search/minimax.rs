//! Depth-limited minimax with alpha-beta pruning.
//!
//! Leaves are scored from the searching (root) player's point of view:
//! nodes where the root player moves maximize, the others minimize.
//!
//! ## Ties
//!
//! Root children are searched with the window `(best - 1, +inf)` so a child
//! that equals the current best comes back with its exact value. All root
//! moves sharing the best score are kept in enumeration order and the
//! configured `TieBreak` picks one.

use std::thread::JoinHandle;
use std::time::Instant;

use tracing::{info, trace};

use super::config::{SearchConfig, TieBreak};
use super::model::SearchModel;
use super::stats::SearchStats;
use crate::core::{GameRng, Player};

/// Larger than any evaluation.
const INF: i32 = 1_000_000;

/// Result of one search.
#[derive(Clone, Debug)]
pub struct SearchOutcome<M> {
    /// Chosen move, `None` when the position has no legal moves.
    pub best_move: Option<M>,
    /// Minimax value of the chosen move for the searching player.
    pub score: i32,
    pub stats: SearchStats,
}

/// Minimax search context.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick a move for the player to move in `model`.
    ///
    /// `rng` is only consulted for `TieBreak::Random`.
    pub fn search<M: SearchModel>(&mut self, model: &M, rng: &mut GameRng) -> SearchOutcome<M::Move> {
        let start = Instant::now();
        self.stats.reset();
        self.stats.nodes = 1;

        let root = model.current_player();
        let moves = model.legal_moves();
        if moves.is_empty() {
            self.stats.leaves = 1;
            self.stats.time_us = start.elapsed().as_micros() as u64;
            return SearchOutcome {
                best_move: None,
                score: model.score(root),
                stats: self.stats.clone(),
            };
        }

        let depth = self.config.max_depth.max(1);
        let mut best = -INF;
        let mut tied: Vec<M::Move> = Vec::new();

        for &mv in &moves {
            let mut child = model.clone();
            child.apply(mv);

            let alpha = if tied.is_empty() { -INF } else { best - 1 };
            let value = self.minimax(&child, depth - 1, alpha, INF, root);
            trace!(%mv, value, "root move");

            if value > best {
                best = value;
                tied.clear();
                tied.push(mv);
            } else if value == best {
                tied.push(mv);
            }
        }

        let best_move = match self.config.tie_break {
            TieBreak::First => tied.first().copied(),
            TieBreak::Random => rng.choose(&tied).copied(),
        };

        self.stats.tied_moves = tied.len() as u32;
        self.stats.time_us = start.elapsed().as_micros() as u64;

        if let Some(mv) = &best_move {
            info!(
                player = %root,
                best = %mv,
                score = best,
                tied = tied.len(),
                nodes = self.stats.nodes,
                "search complete"
            );
        }

        SearchOutcome {
            best_move,
            score: best,
            stats: self.stats.clone(),
        }
    }

    fn minimax<M: SearchModel>(
        &mut self,
        model: &M,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        root: Player,
    ) -> i32 {
        self.stats.nodes += 1;

        let moves = if depth == 0 { Vec::new() } else { model.legal_moves() };
        if moves.is_empty() {
            self.stats.leaves += 1;
            return model.score(root);
        }

        let maximizing = model.current_player() == root;
        let mut value = if maximizing { -INF } else { INF };

        for (i, &mv) in moves.iter().enumerate() {
            let mut child = model.clone();
            child.apply(mv);
            let child_value = self.minimax(&child, depth - 1, alpha, beta, root);

            if maximizing {
                value = value.max(child_value);
                alpha = alpha.max(value);
            } else {
                value = value.min(child_value);
                beta = beta.min(value);
            }

            if alpha >= beta {
                self.stats.cutoffs += (moves.len() - i - 1) as u64;
                break;
            }
        }

        value
    }
}

/// Run a search on a worker thread.
///
/// The model is moved in, so the live game is never touched. Not
/// cancellable; drop the handle to ignore the result.
pub fn spawn_search<M>(
    model: M,
    config: SearchConfig,
    mut rng: GameRng,
) -> JoinHandle<SearchOutcome<M::Move>>
where
    M: SearchModel + Send + 'static,
    M::Move: Send + 'static,
{
    std::thread::spawn(move || Minimax::new(config).search(&model, &mut rng))
}

//! The contract between a game and the search.
//!
//! The search only needs four things from a position: whose turn it is,
//! which moves exist, what a move does, and how good the position looks
//! for a given player. Everything else stays inside the game.

use crate::core::Player;

/// A searchable game position.
///
/// ## Implementation Notes
///
/// - `legal_moves`: empty once the game is decided
/// - `apply`: must be deterministic and must hand the turn over
/// - `score`: higher is better for `player`; symmetric between players
/// - `Clone` should be cheap, the search clones once per child
pub trait SearchModel: Clone {
    type Move: Copy + PartialEq + std::fmt::Debug + std::fmt::Display;

    /// The player to move.
    fn current_player(&self) -> Player;

    /// Every move available to the current player, in a stable order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play a move and end the round.
    fn apply(&mut self, mv: Self::Move);

    /// Static evaluation from `player`'s point of view.
    fn score(&self, player: Player) -> i32;
}

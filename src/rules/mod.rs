//! Game rules: entanglement cycles, collapse, and win evaluation.
//!
//! Everything here is a free function over a `Board`. The turn state
//! machine in `engine` and the search adapter both call into these; neither
//! reimplements a rule.

pub mod collapse;
pub mod cycles;
pub mod win;

pub use collapse::{collapse, CollapseLog, Collapsed};
pub use cycles::cycles_present;
pub use win::{user_has_won, Win, WinClassification, WinResult};

//! Game rules for Cricket.
//!
//! Pure functions over players and game state. Nothing here mutates its
//! inputs: every transition returns a new value, so the rules compose
//! into the typestate engine and the invariant checks without hidden
//! state.

pub mod locking;
pub mod scoring;
pub mod turn;
pub mod win;

pub use locking::{is_locked_for_player, is_locked_globally, locked_targets};
pub use scoring::{ScoredThrow, apply_throw, extra_hits, score_throw};
pub use turn::{TurnCursor, advance_turn};
pub use win::{check_winner, leader};

//! Strictly Cricket - rules engine for Cricket darts
//!
//! Tracks hits on the Cricket targets (15-20, bullseye, and a miss
//! bucket), scores overflow hits, closes targets per player and for the
//! whole table, sequences darts, turns and rounds, and decides the winner.
//!
//! # Architecture
//!
//! - **Registry**: [`Target`], [`TARGETS`], [`HITS_TO_CLOSE`]
//! - **Rules**: pure functions in [`rules`] (locking, scoring, turns, win)
//! - **Engine**: typestate [`Game<S>`](Game) with [`InProgress`] and [`Finished`]
//! - **Host façade**: [`Session`] for a UI event loop
//!
//! # Example
//!
//! ```
//! use strictly_cricket::{GameConfig, Multiplier, Session};
//!
//! let mut session = Session::start(&["Ana", "Bob"], GameConfig::new())?;
//! session.throw(20, Multiplier::Triples)?;
//! assert!(session.state().players()[0].status(strictly_cricket::Target::Twenty).is_locked());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod error;
mod game;
pub mod invariants;
mod player;
pub mod rules;
mod session;
mod state;
mod target;
mod wrapper;

// Crate-level exports - Registry
pub use target::{HITS_TO_CLOSE, TARGET_COUNT, TARGETS, Target, is_valid_target};

// Crate-level exports - Actions
pub use action::{Multiplier, ParseThrowError, Throw};

// Crate-level exports - Players and state
pub use player::{Player, TargetStatus};
pub use state::{GameState, GameStatus, WinNotification, WinReason};

// Crate-level exports - Rules
pub use rules::{
    ScoredThrow, TurnCursor, advance_turn, apply_throw, check_winner, is_locked_for_player,
    is_locked_globally, locked_targets,
};

// Crate-level exports - Engine
pub use config::{DEFAULT_MAX_PLAYERS, DEFAULT_MIN_PLAYERS, DEFAULT_ROUND_LIMIT, GameConfig};
pub use contracts::{Contract, SegmentExists, TargetOpen, ThrowContract};
pub use error::{SetupError, ThrowError};
pub use game::{
    Finished, Game, GameFinished, GameInProgress, GameSetup, GameTransition, InProgress,
    ThrowRecord, start_game,
};
pub use invariants::{CricketInvariants, Invariant, InvariantSet, InvariantViolation};
pub use session::{Session, ThrowReport};
pub use wrapper::AnyGame;

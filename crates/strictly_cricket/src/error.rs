//! Errors surfaced to the host.

use crate::action::Multiplier;
use derive_more::{Display, Error};

/// Error assembling a roster.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// Not enough players to start.
    #[display("At least {min} players are needed, got {count}")]
    TooFewPlayers {
        /// Players supplied.
        count: usize,
        /// Required minimum.
        min: usize,
    },

    /// More players than the rules allow.
    #[display("At most {max} players can play, got {count}")]
    TooManyPlayers {
        /// Players supplied.
        count: usize,
        /// Allowed maximum.
        max: usize,
    },

    /// A name was blank.
    #[display("Player {position} has no name")]
    EmptyName {
        /// One-based roster position.
        position: usize,
    },

    /// Two players share a name.
    #[display("Duplicate player name: {name}")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// The rules cannot produce a playable game.
    #[display("Invalid rules: {reason}")]
    InvalidRules {
        /// The offending setting.
        reason: String,
    },
}

/// Error applying a dart.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ThrowError {
    /// Every player has closed the target.
    #[display("{target} is closed for every player")]
    TargetClosed {
        /// Raw target value.
        target: u32,
    },

    /// The segment has no ring for the multiplier.
    #[display("{target} has no {multiplier} ring")]
    SegmentUnavailable {
        /// Raw target value.
        target: u32,
        /// Requested multiplier.
        multiplier: Multiplier,
    },

    /// The game has already been won.
    #[display("Game is already over")]
    GameOver,

    /// A rule invariant failed after the dart (postcondition failure).
    #[display("Invariant violation: {description}")]
    InvariantViolation {
        /// Which invariants failed.
        description: String,
    },
}

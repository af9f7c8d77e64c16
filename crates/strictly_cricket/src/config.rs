//! Tunable rules for a game.

use crate::error::SetupError;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Rounds played before the highest score wins outright.
pub const DEFAULT_ROUND_LIMIT: u32 = 20;

/// Fewest players a game can start with.
pub const DEFAULT_MIN_PLAYERS: usize = 2;

/// Most players a game can start with.
pub const DEFAULT_MAX_PLAYERS: usize = 4;

/// Rule settings for a game.
///
/// Every field has a default, so a partial TOML `[rules]` table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Last round played; the game ends when play passes it.
    #[serde(default = "default_round_limit")]
    round_limit: u32,

    /// Minimum roster size.
    #[serde(default = "default_min_players")]
    min_players: usize,

    /// Maximum roster size.
    #[serde(default = "default_max_players")]
    max_players: usize,

    /// Reject multipliers the segment has no ring for (triple bull, double miss).
    #[serde(default = "default_enforce_segments")]
    enforce_segments: bool,
}

fn default_round_limit() -> u32 {
    DEFAULT_ROUND_LIMIT
}

fn default_min_players() -> usize {
    DEFAULT_MIN_PLAYERS
}

fn default_max_players() -> usize {
    DEFAULT_MAX_PLAYERS
}

fn default_enforce_segments() -> bool {
    true
}

impl GameConfig {
    /// Standard rules: 20 rounds, 2-4 players, real board segments.
    #[instrument]
    pub fn new() -> Self {
        Self {
            round_limit: default_round_limit(),
            min_players: default_min_players(),
            max_players: default_max_players(),
            enforce_segments: default_enforce_segments(),
        }
    }

    /// Returns the round limit.
    pub fn round_limit(&self) -> u32 {
        self.round_limit
    }

    /// Returns the minimum roster size.
    pub fn min_players(&self) -> usize {
        self.min_players
    }

    /// Returns the maximum roster size.
    pub fn max_players(&self) -> usize {
        self.max_players
    }

    /// Whether segment rings are enforced.
    pub fn enforce_segments(&self) -> bool {
        self.enforce_segments
    }

    /// Sets the round limit.
    pub fn with_round_limit(mut self, round_limit: u32) -> Self {
        self.round_limit = round_limit;
        self
    }

    /// Sets the allowed roster size.
    pub fn with_players(mut self, min_players: usize, max_players: usize) -> Self {
        self.min_players = min_players;
        self.max_players = max_players;
        self
    }

    /// Turns segment enforcement on or off.
    pub fn with_enforce_segments(mut self, enforce_segments: bool) -> Self {
        self.enforce_segments = enforce_segments;
        self
    }

    /// Checks that a game can be played under these rules.
    ///
    /// Cricket needs at least two players for the round to turn over, a
    /// roster range that is not empty, and at least one round.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::InvalidRules` naming the first bad setting.
    #[instrument]
    pub fn validate(&self) -> Result<(), SetupError> {
        let reason = if self.min_players < DEFAULT_MIN_PLAYERS {
            format!(
                "min_players is {}, must be at least {DEFAULT_MIN_PLAYERS}",
                self.min_players
            )
        } else if self.max_players < self.min_players {
            format!(
                "max_players ({}) is below min_players ({})",
                self.max_players, self.min_players
            )
        } else if self.round_limit == 0 {
            "round_limit must be at least 1".to_string()
        } else {
            return Ok(());
        };

        warn!(%reason, "Rejected rules");
        Err(SetupError::InvalidRules { reason })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

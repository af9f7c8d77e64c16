//! Per-player scoring record.

use crate::target::{TARGET_COUNT, TARGETS, Target};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Hit, point and lock status of one target for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetStatus {
    pub(crate) hits: u32,
    pub(crate) points: u32,
    pub(crate) is_locked: bool,
}

impl TargetStatus {
    /// Total hits recorded, including those past the closing threshold.
    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// Points earned on this target.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Whether the player has closed this target.
    pub fn is_locked(&self) -> bool {
        self.is_locked
    }
}

/// A player and their marks on every target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) score: u32,
    /// Indexed by [`Target::index`].
    pub(crate) numbers: [TargetStatus; TARGET_COUNT],
}

impl Player {
    /// Creates a player with no hits and no score on any target.
    ///
    /// The name is taken as given; uniqueness and emptiness are checked
    /// when the roster is assembled.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_string(),
            score: 0,
            numbers: [TargetStatus::default(); TARGET_COUNT],
        }
    }

    /// Returns the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cumulative score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Status of a single target.
    pub fn status(&self, target: Target) -> &TargetStatus {
        &self.numbers[target.index()]
    }

    /// All targets with their status, in registry order.
    pub fn numbers(&self) -> impl Iterator<Item = (Target, &TargetStatus)> {
        TARGETS.into_iter().zip(self.numbers.iter())
    }

    /// Sum of points across every target.
    pub fn points_total(&self) -> u32 {
        self.numbers.iter().map(|s| s.points).sum()
    }

    /// Whether every closable target is locked for this player.
    pub fn has_closed_all(&self) -> bool {
        Target::closable().all(|t| self.status(t).is_locked)
    }

    pub(crate) fn status_mut(&mut self, target: Target) -> &mut TargetStatus {
        &mut self.numbers[target.index()]
    }
}

//! Target registry: the fixed set of board segments that count in Cricket.

use crate::action::Multiplier;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Hits a player needs on a target to close it.
pub const HITS_TO_CLOSE: u32 = 3;

/// Number of entries in the registry.
pub const TARGET_COUNT: usize = 8;

/// Every valid target, in board order (numbers, bullseye, miss).
pub const TARGETS: [Target; TARGET_COUNT] = [
    Target::Fifteen,
    Target::Sixteen,
    Target::Seventeen,
    Target::Eighteen,
    Target::Nineteen,
    Target::Twenty,
    Target::Bull,
    Target::Miss,
];

/// A scoring target on the board.
///
/// Declaration order matches [`TARGETS`], so the derived `Ord` sorts
/// targets the way the scoreboard lists them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Target {
    /// The 15 segment.
    Fifteen,
    /// The 16 segment.
    Sixteen,
    /// The 17 segment.
    Seventeen,
    /// The 18 segment.
    Eighteen,
    /// The 19 segment.
    Nineteen,
    /// The 20 segment.
    Twenty,
    /// Bullseye (25).
    Bull,
    /// A dart that missed every counting segment (0).
    Miss,
}

impl Target {
    /// Numeric value of the target, also its points per extra hit.
    pub fn value(self) -> u32 {
        match self {
            Target::Fifteen => 15,
            Target::Sixteen => 16,
            Target::Seventeen => 17,
            Target::Eighteen => 18,
            Target::Nineteen => 19,
            Target::Twenty => 20,
            Target::Bull => 25,
            Target::Miss => 0,
        }
    }

    /// Looks up a target by its numeric value.
    pub fn from_value(value: u32) -> Option<Self> {
        TARGETS.into_iter().find(|t| t.value() == value)
    }

    /// Position of this target in [`TARGETS`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether hits on this target can ever close it.
    ///
    /// The miss bucket counts darts but never closes.
    pub fn closes(self) -> bool {
        self != Target::Miss
    }

    /// Largest multiplier the physical segment offers.
    pub fn max_multiplier(self) -> Multiplier {
        match self {
            Target::Bull => Multiplier::Doubles,
            Target::Miss => Multiplier::Singles,
            _ => Multiplier::Triples,
        }
    }

    /// Whether the segment has a ring for this multiplier.
    pub fn accepts(self, multiplier: Multiplier) -> bool {
        multiplier.hits() <= self.max_multiplier().hits()
    }

    /// Short label for scoreboards.
    pub fn label(self) -> String {
        match self {
            Target::Bull => "Bull".to_string(),
            Target::Miss => "Out".to_string(),
            other => other.value().to_string(),
        }
    }

    /// Targets that must be closed to win early (everything but the miss bucket).
    pub fn closable() -> impl Iterator<Item = Target> {
        TARGETS.into_iter().filter(|t| t.closes())
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Checks whether a raw value names a target in the registry.
#[instrument]
pub fn is_valid_target(value: u32) -> bool {
    Target::from_value(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_registry_values_in_board_order() {
        let values: Vec<u32> = TARGETS.iter().map(|t| t.value()).collect();
        assert_eq!(values, vec![15, 16, 17, 18, 19, 20, 25, 0]);
    }

    #[test]
    fn test_index_matches_registry_position() {
        for (i, target) in Target::iter().enumerate() {
            assert_eq!(target.index(), i);
            assert_eq!(TARGETS[i], target);
        }
    }

    #[test]
    fn test_valid_and_invalid_values() {
        assert!(is_valid_target(20));
        assert!(is_valid_target(25));
        assert!(is_valid_target(0));
        assert!(!is_valid_target(14));
        assert!(!is_valid_target(21));
        assert!(!is_valid_target(50));
    }

    #[test]
    fn test_miss_never_closes() {
        assert!(!Target::Miss.closes());
        assert_eq!(Target::closable().count(), 7);
    }

    #[test]
    fn test_segment_rings() {
        assert!(Target::Twenty.accepts(Multiplier::Triples));
        assert!(Target::Bull.accepts(Multiplier::Doubles));
        assert!(!Target::Bull.accepts(Multiplier::Triples));
        assert!(Target::Miss.accepts(Multiplier::Singles));
        assert!(!Target::Miss.accepts(Multiplier::Doubles));
    }
}

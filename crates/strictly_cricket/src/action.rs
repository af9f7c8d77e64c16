//! First-class throw events.
//!
//! A throw is one dart landing. It is a domain event: it can be parsed
//! from darts shorthand, validated against the board, logged and replayed
//! independently of the game that applies it.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Ring of the segment a dart landed in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Multiplier {
    /// Single ring, one hit.
    Singles,
    /// Double ring, two hits.
    Doubles,
    /// Triple ring, three hits.
    Triples,
}

impl Multiplier {
    /// Hits this ring adds to the target.
    pub fn hits(self) -> u32 {
        match self {
            Multiplier::Singles => 1,
            Multiplier::Doubles => 2,
            Multiplier::Triples => 3,
        }
    }

    /// Shorthand prefix (`""`, `"D"`, `"T"`).
    fn prefix(self) -> &'static str {
        match self {
            Multiplier::Singles => "",
            Multiplier::Doubles => "D",
            Multiplier::Triples => "T",
        }
    }
}

/// One dart landing on the board.
///
/// The target is kept as the raw value reported by the host so that
/// values outside the registry reach the rules, which ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Throw {
    /// Raw target value (15-20, 25, or 0 for a miss).
    pub target: u32,
    /// Ring the dart landed in.
    pub multiplier: Multiplier,
}

impl Throw {
    /// Creates a new throw.
    #[instrument]
    pub fn new(target: u32, multiplier: Multiplier) -> Self {
        Self { target, multiplier }
    }

    /// A dart that scored nothing.
    pub fn miss() -> Self {
        Self::new(0, Multiplier::Singles)
    }
}

impl std::fmt::Display for Throw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.target, self.multiplier) {
            (0, _) => write!(f, "MISS"),
            (25, Multiplier::Singles) => write!(f, "BULL"),
            (25, Multiplier::Doubles) => write!(f, "DB"),
            (target, multiplier) => write!(f, "{}{}", multiplier.prefix(), target),
        }
    }
}

/// Error parsing darts shorthand.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseThrowError {
    /// Nothing was entered.
    #[display("Empty throw")]
    Empty,

    /// The text is not darts shorthand.
    #[display("Unrecognised throw '{input}' (expected e.g. 20, D16, T19, BULL, DB, MISS)")]
    Malformed {
        /// The offending input.
        input: String,
    },
}

impl FromStr for Throw {
    type Err = ParseThrowError;

    /// Parses `20`, `S20`, `D16`, `T19`, `BULL`, `DB`, `0`, `MISS` or `OUT`
    /// (case-insensitive).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_uppercase();
        if text.is_empty() {
            return Err(ParseThrowError::Empty);
        }

        match text.as_str() {
            "MISS" | "OUT" => return Ok(Throw::miss()),
            "BULL" | "SB" => return Ok(Throw::new(25, Multiplier::Singles)),
            "DB" | "DBULL" => return Ok(Throw::new(25, Multiplier::Doubles)),
            _ => {}
        }

        let (multiplier, digits) = match text.as_bytes()[0] {
            b'S' => (Multiplier::Singles, &text[1..]),
            b'D' => (Multiplier::Doubles, &text[1..]),
            b'T' => (Multiplier::Triples, &text[1..]),
            _ => (Multiplier::Singles, text.as_str()),
        };

        let target = digits
            .parse::<u32>()
            .map_err(|_| ParseThrowError::Malformed {
                input: s.trim().to_string(),
            })?;

        Ok(Throw::new(target, multiplier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_hits() {
        assert_eq!(Multiplier::Singles.hits(), 1);
        assert_eq!(Multiplier::Doubles.hits(), 2);
        assert_eq!(Multiplier::Triples.hits(), 3);
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!("20".parse::<Throw>(), Ok(Throw::new(20, Multiplier::Singles)));
        assert_eq!("s15".parse::<Throw>(), Ok(Throw::new(15, Multiplier::Singles)));
        assert_eq!("D16".parse::<Throw>(), Ok(Throw::new(16, Multiplier::Doubles)));
        assert_eq!(" t19 ".parse::<Throw>(), Ok(Throw::new(19, Multiplier::Triples)));
        assert_eq!("bull".parse::<Throw>(), Ok(Throw::new(25, Multiplier::Singles)));
        assert_eq!("DB".parse::<Throw>(), Ok(Throw::new(25, Multiplier::Doubles)));
        assert_eq!("out".parse::<Throw>(), Ok(Throw::miss()));
        assert_eq!("0".parse::<Throw>(), Ok(Throw::miss()));
    }

    #[test]
    fn test_parse_keeps_unknown_numbers() {
        assert_eq!("T14".parse::<Throw>(), Ok(Throw::new(14, Multiplier::Triples)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Throw>(), Err(ParseThrowError::Empty));
        assert!(matches!(
            "Q20".parse::<Throw>(),
            Err(ParseThrowError::Malformed { .. })
        ));
        assert!(matches!(
            "D".parse::<Throw>(),
            Err(ParseThrowError::Malformed { .. })
        ));
    }

    #[test]
    fn test_display_uses_shorthand() {
        assert_eq!(Throw::new(19, Multiplier::Triples).to_string(), "T19");
        assert_eq!(Throw::new(20, Multiplier::Singles).to_string(), "20");
        assert_eq!(Throw::new(25, Multiplier::Doubles).to_string(), "DB");
        assert_eq!(Throw::miss().to_string(), "MISS");
    }
}

//! Recorded games: a roster plus a list of darts in shorthand.

use crate::config::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_cricket::{AnyGame, GameConfig, Throw, start_game};
use tracing::{debug, info, instrument};

/// A game recorded as TOML.
///
/// ```toml
/// players = ["Ana", "Bob"]
/// throws = ["T20", "T20", "MISS", "T20"]
/// ```
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameScript {
    /// Roster in throwing order.
    players: Vec<String>,

    /// Darts in throw notation.
    #[serde(default)]
    throws: Vec<String>,

    /// Rules overriding the application config.
    #[serde(default)]
    rules: Option<GameConfig>,
}

impl GameScript {
    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read script: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse script: {}", e)))?;
        if let Some(rules) = &script.rules {
            rules
                .validate()
                .map_err(|e| ConfigError::new(e.to_string()))?;
        }
        debug!(
            players = script.players.len(),
            throws = script.throws.len(),
            "Script parsed"
        );
        Ok(script)
    }

    /// Parses every dart.
    ///
    /// # Errors
    ///
    /// Names the first dart (1-based) that is not valid notation.
    #[instrument(skip(self))]
    pub fn darts(&self) -> Result<Vec<Throw>, ConfigError> {
        self.throws
            .iter()
            .enumerate()
            .map(|(i, text)| {
                text.parse::<Throw>()
                    .map_err(|e| ConfigError::new(format!("Dart {}: {}", i + 1, e)))
            })
            .collect()
    }

    /// Replays the script, using its own rules if it has any.
    #[instrument(skip(self, fallback))]
    pub fn replay(&self, fallback: &GameConfig) -> anyhow::Result<AnyGame> {
        let rules = self.rules.clone().unwrap_or_else(|| fallback.clone());
        let darts = self.darts()?;
        let game = start_game(&self.players, rules)?;
        let transition = game.replay(&darts)?;
        let game = AnyGame::from(transition);
        info!(
            darts = game.history().len(),
            finished = game.is_finished(),
            "Script replayed"
        );
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = GameScript::from_toml(
            r#"
            players = ["Ana", "Bob"]
            throws = ["T20", "t20", "miss"]
            "#,
        )
        .unwrap();
        assert_eq!(script.players(), &vec!["Ana".to_string(), "Bob".to_string()]);
        assert_eq!(script.darts().unwrap().len(), 3);
        assert!(script.rules().is_none());
    }

    #[test]
    fn test_bad_dart_is_named() {
        let script = GameScript::from_toml(
            r#"
            players = ["Ana", "Bob"]
            throws = ["T20", "X9"]
            "#,
        )
        .unwrap();
        let err = script.darts().unwrap_err();
        assert!(err.message.starts_with("Dart 2:"));
    }

    #[test]
    fn test_replay_scores() {
        let script = GameScript::from_toml(
            r#"
            players = ["Ana", "Bob"]
            throws = ["T20", "T20", "MISS", "T20"]
            "#,
        )
        .unwrap();
        let game = script.replay(&GameConfig::new()).unwrap();
        assert_eq!(game.state().players()[0].score(), 60);
        assert!(!game.is_finished());
    }

    #[test]
    fn test_script_rules_override() {
        let script = GameScript::from_toml(
            r#"
            players = ["Ana", "Bob"]
            throws = ["MISS", "MISS", "MISS", "MISS", "MISS", "MISS"]

            [rules]
            round_limit = 1
            "#,
        )
        .unwrap();
        let game = script.replay(&GameConfig::new()).unwrap();
        assert!(game.is_finished());
        assert_eq!(game.winner().map(|w| w.winner_name()), Some("Ana"));
        assert_eq!(game.config().round_limit(), 1);
    }

    #[test]
    fn test_scoreboard_uses_script_rules() {
        let script = GameScript::from_toml(
            r#"
            players = ["Ana", "Bob"]
            throws = ["MISS"]

            [rules]
            round_limit = 3
            "#,
        )
        .unwrap();
        let game = script.replay(&GameConfig::new()).unwrap();
        let board = crate::scoreboard::render(game.state(), game.config());
        assert!(board.starts_with("Round 1/3 | Ana to throw | Dart 2/3"));
    }
}

//! Serializable game wrapper for typestate phases.

use crate::config::GameConfig;
use crate::game::{Finished, Game, GameTransition, InProgress, ThrowRecord};
use crate::state::{GameState, WinNotification};
use serde::{Deserialize, Serialize};

/// A game in either phase.
///
/// Typestate phases are distinct types, so hosts that keep one game
/// across darts (or serialize it) hold this enum instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyGame {
    /// Darts are being thrown.
    InProgress(Game<InProgress>),
    /// The game has a winner.
    Finished(Game<Finished>),
}

impl AnyGame {
    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        match self {
            AnyGame::InProgress(game) => game.state(),
            AnyGame::Finished(game) => game.state(),
        }
    }

    /// Returns the rules the game is played under.
    pub fn config(&self) -> &GameConfig {
        match self {
            AnyGame::InProgress(game) => game.config(),
            AnyGame::Finished(game) => game.config(),
        }
    }

    /// Returns every applied dart.
    pub fn history(&self) -> &[ThrowRecord] {
        match self {
            AnyGame::InProgress(game) => game.history(),
            AnyGame::Finished(game) => game.history(),
        }
    }

    /// Returns the winner once the game is over.
    pub fn winner(&self) -> Option<&WinNotification> {
        match self {
            AnyGame::InProgress(_) => None,
            AnyGame::Finished(game) => Some(game.winner()),
        }
    }

    /// Whether the game is over.
    pub fn is_finished(&self) -> bool {
        matches!(self, AnyGame::Finished(_))
    }
}

impl From<Game<InProgress>> for AnyGame {
    fn from(game: Game<InProgress>) -> Self {
        AnyGame::InProgress(game)
    }
}

impl From<Game<Finished>> for AnyGame {
    fn from(game: Game<Finished>) -> Self {
        AnyGame::Finished(game)
    }
}

impl From<GameTransition> for AnyGame {
    fn from(transition: GameTransition) -> Self {
        match transition {
            GameTransition::InProgress(game) => AnyGame::InProgress(game),
            GameTransition::Finished(game) => AnyGame::Finished(game),
        }
    }
}

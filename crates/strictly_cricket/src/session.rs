//! Host-facing session: start a game, feed it darts, read the state.

use crate::action::{Multiplier, Throw};
use crate::config::GameConfig;
use crate::error::{SetupError, ThrowError};
use crate::game::{ThrowRecord, start_game};
use crate::rules::locking::{is_locked_for_player, is_locked_globally};
use crate::state::{GameState, WinNotification};
use crate::wrapper::AnyGame;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// What a dart did, as reported to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowReport {
    record: Option<ThrowRecord>,
    winner: Option<WinNotification>,
}

impl ThrowReport {
    /// The applied dart, or `None` if it was ignored.
    pub fn record(&self) -> Option<&ThrowRecord> {
        self.record.as_ref()
    }

    /// Set when this dart ended the game.
    pub fn winner(&self) -> Option<&WinNotification> {
        self.winner.as_ref()
    }

    /// Whether the dart hit no known target and changed nothing.
    pub fn was_ignored(&self) -> bool {
        self.record.is_none()
    }
}

/// One game from roster to winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    game: AnyGame,
}

impl Session {
    /// Starts a game for 2-4 unique, non-empty names.
    ///
    /// # Errors
    ///
    /// Returns a `SetupError` describing the first problem with the roster.
    #[instrument(skip(names, config))]
    pub fn start<N: AsRef<str>>(names: &[N], config: GameConfig) -> Result<Self, SetupError> {
        let game = start_game(names, config)?;
        Ok(Self { game: game.into() })
    }

    /// Records a dart by the current player.
    ///
    /// # Errors
    ///
    /// Returns `ThrowError::GameOver` once the game is won, or the
    /// rejection from the rules.
    #[instrument(skip(self))]
    pub fn throw(
        &mut self,
        target: u32,
        multiplier: Multiplier,
    ) -> Result<ThrowReport, ThrowError> {
        self.play(Throw::new(target, multiplier))
    }

    /// Records a dart given as a [`Throw`].
    ///
    /// # Errors
    ///
    /// See [`Session::throw`].
    #[instrument(skip(self))]
    pub fn play(&mut self, throw: Throw) -> Result<ThrowReport, ThrowError> {
        let AnyGame::InProgress(game) = &self.game else {
            return Err(ThrowError::GameOver);
        };

        let darts_before = game.history().len();
        let next = AnyGame::from(game.throw_dart(throw)?);

        let record = if next.history().len() > darts_before {
            next.history().last().cloned()
        } else {
            None
        };
        let winner = next.winner().cloned();
        if let Some(winner) = &winner {
            info!(%winner, "Session finished");
        }

        self.game = next;
        Ok(ThrowReport { record, winner })
    }

    /// Current state for rendering.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// The underlying game.
    pub fn game(&self) -> &AnyGame {
        &self.game
    }

    /// Winner, once the game is over.
    pub fn winner(&self) -> Option<&WinNotification> {
        self.game.winner()
    }

    /// Whether the game is over.
    pub fn is_finished(&self) -> bool {
        self.game.is_finished()
    }

    /// Whether `target` is closed for every player; such darts are rejected.
    pub fn is_locked(&self, target: u32) -> bool {
        is_locked_globally(target, self.state().players())
    }

    /// Whether the current player has closed `target`.
    pub fn is_locked_for_current(&self, target: u32) -> bool {
        self.state()
            .current_player()
            .is_some_and(|p| is_locked_for_player(p, target))
    }
}

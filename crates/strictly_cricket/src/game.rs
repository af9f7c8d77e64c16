//! Typestate-based game engine for Cricket.
//!
//! The game phase is encoded in the type parameter: only
//! `Game<InProgress>` accepts darts and only `Game<Finished>` has a
//! winner. Darts never modify a game in place; each one yields a new
//! game value.

use crate::action::Throw;
use crate::config::GameConfig;
use crate::contracts::{Contract, SegmentExists, ThrowContract};
use crate::error::{SetupError, ThrowError};
use crate::player::Player;
use crate::rules::locking::is_locked_globally;
use crate::rules::scoring::score_throw;
use crate::rules::win::check_winner;
use crate::state::{GameState, WinNotification};
use crate::target::{Target, is_valid_target};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Phase marker: darts are being thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InProgress;

/// Phase marker: the game has a winner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finished {
    winner: WinNotification,
}

/// One dart as it was applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThrowRecord {
    /// Roster index of the thrower.
    pub player_index: usize,
    /// Round the dart was thrown in.
    pub round: u32,
    /// Dart within the turn, 1 to 3.
    pub throw_number: u32,
    /// The dart itself.
    pub throw: Throw,
    /// Hits past the closing threshold.
    pub extra_hits: u32,
    /// Points scored.
    pub points_gained: u32,
    /// Whether the dart closed the target for the thrower.
    pub closed: bool,
}

/// A Cricket game in phase `S`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game<S> {
    pub(crate) state: GameState,
    pub(crate) config: GameConfig,
    pub(crate) history: Vec<ThrowRecord>,
    pub(crate) phase: S,
}

/// Game accepting darts.
pub type GameInProgress = Game<InProgress>;

/// Game with a winner.
pub type GameFinished = Game<Finished>;

/// Result of a dart - explicit state transition.
#[derive(Debug, Clone)]
pub enum GameTransition {
    /// Play continues.
    InProgress(Game<InProgress>),
    /// The dart ended the game.
    Finished(Game<Finished>),
}

impl GameTransition {
    /// Returns the winner if the game just ended.
    pub fn winner(&self) -> Option<&WinNotification> {
        match self {
            GameTransition::InProgress(_) => None,
            GameTransition::Finished(game) => Some(game.winner()),
        }
    }

    /// Returns the state after the dart, whichever phase it is in.
    pub fn state(&self) -> &GameState {
        match self {
            GameTransition::InProgress(game) => game.state(),
            GameTransition::Finished(game) => game.state(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Setup - roster validation, produces InProgress
// ─────────────────────────────────────────────────────────────

/// Builder for a game's roster.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    config: GameConfig,
    names: Vec<String>,
}

impl GameSetup {
    /// Creates a setup with standard rules.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a setup with the given rules.
    #[instrument]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            names: Vec::new(),
        }
    }

    /// Adds a player. Names are trimmed and must be unique and non-empty.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::EmptyName`, `SetupError::DuplicateName` or
    /// `SetupError::TooManyPlayers`.
    #[instrument(skip(self, name), fields(name = %name.as_ref()))]
    pub fn add_player(mut self, name: impl AsRef<str>) -> Result<Self, SetupError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(SetupError::EmptyName {
                position: self.names.len() + 1,
            });
        }
        if self.names.iter().any(|n| n == name) {
            return Err(SetupError::DuplicateName {
                name: name.to_string(),
            });
        }
        if self.names.len() >= self.config.max_players() {
            return Err(SetupError::TooManyPlayers {
                count: self.names.len() + 1,
                max: self.config.max_players(),
            });
        }
        self.names.push(name.to_string());
        Ok(self)
    }

    /// Adds several players in order.
    pub fn add_players<I, N>(self, names: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        names.into_iter().try_fold(self, |setup, n| setup.add_player(n))
    }

    /// Starts the game.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::InvalidRules` if the rules are unplayable, or
    /// `SetupError::TooFewPlayers` if the roster is too small.
    #[instrument(skip(self), fields(roster = self.names.len()))]
    pub fn start(self) -> Result<Game<InProgress>, SetupError> {
        self.config.validate()?;
        if self.names.len() < self.config.min_players() {
            return Err(SetupError::TooFewPlayers {
                count: self.names.len(),
                min: self.config.min_players(),
            });
        }

        let players = self.names.iter().map(Player::new).collect();
        info!(players = ?self.names, "Game started");

        Ok(Game {
            state: GameState::new(players),
            config: self.config,
            history: Vec::new(),
            phase: InProgress,
        })
    }
}

/// Validates `names` and starts a game under `config`.
#[instrument(skip(names, config))]
pub fn start_game<N: AsRef<str>>(
    names: &[N],
    config: GameConfig,
) -> Result<Game<InProgress>, SetupError> {
    GameSetup::with_config(config)
        .add_players(names.iter().map(|n| n.as_ref()))?
        .start()
}

// ─────────────────────────────────────────────────────────────
//  Only InProgress accepts darts
// ─────────────────────────────────────────────────────────────

impl Game<InProgress> {
    /// Applies one dart by the current player and returns the next game.
    ///
    /// The pipeline is: validate, score, sequence, check for a winner.
    /// A dart at a target outside the registry is ignored and the game
    /// comes back unchanged.
    ///
    /// # Errors
    ///
    /// - `ThrowError::TargetClosed` if every player has closed the target
    /// - `ThrowError::SegmentUnavailable` if segments are enforced and the
    ///   ring does not exist
    /// - `ThrowError::InvariantViolation` if a postcondition fails (debug builds)
    #[instrument(skip(self), fields(
        round = self.state.current_round(),
        player = self.state.current_player_index(),
        dart = self.state.current_throw()
    ))]
    pub fn throw_dart(&self, throw: Throw) -> Result<GameTransition, ThrowError> {
        if !is_valid_target(throw.target) {
            warn!(%throw, "Ignoring dart outside the target registry");
            return Ok(GameTransition::InProgress(self.clone()));
        }

        ThrowContract::pre(&self.state, &throw)?;
        if self.config.enforce_segments() {
            SegmentExists::check(&throw)?;
        }

        let thrower_index = self.state.current_player_index();
        let thrower = self.state.current_player().ok_or_else(|| {
            ThrowError::InvariantViolation {
                description: format!("No player at index {thrower_index}"),
            }
        })?;

        let scored = score_throw(
            thrower,
            throw.target,
            throw.multiplier,
            self.state.players(),
        );
        if scored.closed {
            info!(player = %thrower.name(), %throw, "Target closed");
        }

        let record = ThrowRecord {
            player_index: thrower_index,
            round: self.state.current_round(),
            throw_number: self.state.current_throw(),
            throw,
            extra_hits: scored.extra_hits,
            points_gained: scored.points_gained,
            closed: scored.closed,
        };

        let next = self
            .state
            .with_player(thrower_index, scored.player)
            .advance_turn();

        if cfg!(debug_assertions) {
            ThrowContract::post(&self.state, &next)?;
        }

        let mut history = self.history.clone();
        history.push(record);
        debug!(darts = history.len(), "Dart applied");

        match check_winner(&next, thrower_index, &self.config) {
            Some(winner) => {
                info!(%winner, "Game finished");
                Ok(GameTransition::Finished(Game {
                    state: next.finished(winner.clone()),
                    config: self.config.clone(),
                    history,
                    phase: Finished { winner },
                }))
            }
            None => Ok(GameTransition::InProgress(Game {
                state: next,
                config: self.config.clone(),
                history,
                phase: InProgress,
            })),
        }
    }

    /// Applies a recorded list of darts in order.
    ///
    /// # Errors
    ///
    /// Fails on the first rejected dart, or with `ThrowError::GameOver`
    /// if darts remain after the game was won.
    #[instrument(skip(self, throws), fields(darts = throws.len()))]
    pub fn replay(self, throws: &[Throw]) -> Result<GameTransition, ThrowError> {
        let mut transition = GameTransition::InProgress(self);
        for throw in throws {
            transition = match transition {
                GameTransition::InProgress(game) => game.throw_dart(*throw)?,
                GameTransition::Finished(_) => return Err(ThrowError::GameOver),
            };
        }
        Ok(transition)
    }

    /// Whether `target` is closed for every player.
    pub fn is_locked(&self, target: u32) -> bool {
        is_locked_globally(target, self.state.players())
    }

    /// Targets the current player may still throw at.
    pub fn open_targets(&self) -> Vec<Target> {
        Target::closable()
            .filter(|t| !self.is_locked(t.value()))
            .chain(std::iter::once(Target::Miss))
            .collect()
    }

    /// The player to throw next.
    pub fn current_player(&self) -> Option<&Player> {
        self.state.current_player()
    }
}

// ─────────────────────────────────────────────────────────────
//  Common methods available on all phases
// ─────────────────────────────────────────────────────────────

impl<S> Game<S> {
    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the roster.
    pub fn players(&self) -> &[Player] {
        self.state.players()
    }

    /// Returns the rules in force.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns every applied dart, oldest first.
    pub fn history(&self) -> &[ThrowRecord] {
        &self.history
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished state - has winner() method
// ─────────────────────────────────────────────────────────────

impl Game<Finished> {
    /// Returns the win notification.
    ///
    /// Only exists on `Game<Finished>`, so a winner is guaranteed.
    pub fn winner(&self) -> &WinNotification {
        &self.phase.winner
    }
}

//! Game state shared by every phase.

use crate::player::Player;
use crate::rules::locking::locked_targets;
use crate::rules::turn::{TurnCursor, advance_turn};
use crate::target::Target;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// How a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner closed every target while holding the outright lead.
    ClosedAll,
    /// The round limit passed and the winner had the highest score.
    RoundLimit,
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinReason::ClosedAll => write!(f, "closed every number with the highest score"),
            WinReason::RoundLimit => write!(f, "highest score after the final round"),
        }
    }
}

/// Notice sent to the host when a game finishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinNotification {
    winner_name: String,
    winner_score: u32,
    winner_index: usize,
    reason: WinReason,
}

impl WinNotification {
    pub(crate) fn new(winner_index: usize, winner: &Player, reason: WinReason) -> Self {
        Self {
            winner_name: winner.name().to_string(),
            winner_score: winner.score(),
            winner_index,
            reason,
        }
    }

    /// Returns the winner's name.
    pub fn winner_name(&self) -> &str {
        &self.winner_name
    }

    /// Returns the winner's final score.
    pub fn winner_score(&self) -> u32 {
        self.winner_score
    }

    /// Returns the winner's position in the roster.
    pub fn winner_index(&self) -> usize {
        self.winner_index
    }

    /// Returns how the game was won.
    pub fn reason(&self) -> WinReason {
        self.reason
    }
}

impl std::fmt::Display for WinNotification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} wins with {} points ({})",
            self.winner_name, self.winner_score, self.reason
        )
    }
}

/// Whether the game is still being played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Darts are still being thrown.
    InProgress,
    /// The game is over.
    Finished(WinNotification),
}

/// Snapshot of a game, replaced wholesale after every dart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) players: Vec<Player>,
    pub(crate) cursor: TurnCursor,
    /// Refreshed after each dart for display; decisions re-derive it.
    pub(crate) locked_targets: BTreeSet<Target>,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Fresh state for a validated roster.
    #[instrument(skip(players), fields(roster = players.len()))]
    pub(crate) fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            cursor: TurnCursor::start(),
            locked_targets: BTreeSet::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Players in throwing order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player to throw next.
    pub fn current_player_index(&self) -> usize {
        self.cursor.player_index
    }

    /// The player to throw next.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.cursor.player_index)
    }

    /// Current round, starting at 1.
    pub fn current_round(&self) -> u32 {
        self.cursor.round
    }

    /// Dart within the current turn, 1 to 3.
    pub fn current_throw(&self) -> u32 {
        self.cursor.throw_number
    }

    /// Turn position as a single value.
    pub fn cursor(&self) -> TurnCursor {
        self.cursor
    }

    /// Targets every player has closed, as of the last dart.
    pub fn locked_targets(&self) -> &BTreeSet<Target> {
        &self.locked_targets
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Copy of this state with one player's record replaced.
    #[instrument(skip(self, player))]
    pub(crate) fn with_player(&self, index: usize, player: Player) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.players.get_mut(index) {
            *slot = player;
        }
        next.locked_targets = locked_targets(&next.players);
        next
    }

    /// Copy of this state moved on by one dart.
    #[instrument(skip(self))]
    pub fn advance_turn(&self) -> Self {
        let mut next = self.clone();
        next.cursor = advance_turn(self.cursor, self.players.len());
        next
    }

    pub(crate) fn finished(mut self, notification: WinNotification) -> Self {
        self.status = GameStatus::Finished(notification);
        self
    }
}

//! Target locking predicates.
//!
//! A target is locked for a player once that player has closed it, and
//! locked globally once every player in the roster has. Global status is
//! always derived from the live roster.

use crate::player::Player;
use crate::target::Target;
use std::collections::BTreeSet;
use tracing::instrument;

/// Checks whether `target` is closed for a single player.
///
/// Invalid targets count as locked so they can never be thrown at; the
/// miss bucket is never locked.
#[instrument(skip(player), fields(player = %player.name()))]
pub fn is_locked_for_player(player: &Player, target: u32) -> bool {
    match Target::from_value(target) {
        None => true,
        Some(Target::Miss) => false,
        Some(t) => player.status(t).is_locked(),
    }
}

/// Checks whether every player in the roster has closed `target`.
///
/// Invalid targets count as locked; the miss bucket is never locked.
#[instrument(skip(players), fields(roster = players.len()))]
pub fn is_locked_globally(target: u32, players: &[Player]) -> bool {
    match Target::from_value(target) {
        None => true,
        Some(Target::Miss) => false,
        Some(t) => players.iter().all(|p| p.status(t).is_locked()),
    }
}

/// Targets currently closed by every player.
#[instrument(skip(players), fields(roster = players.len()))]
pub fn locked_targets(players: &[Player]) -> BTreeSet<Target> {
    Target::closable()
        .filter(|t| is_locked_globally(t.value(), players))
        .collect()
}

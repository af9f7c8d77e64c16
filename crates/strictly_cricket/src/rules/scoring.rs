//! Score engine: applies one dart to one player.

use super::locking::is_locked_globally;
use crate::action::Multiplier;
use crate::player::Player;
use crate::target::{HITS_TO_CLOSE, Target};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A player's record after a dart, with what the dart did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredThrow {
    /// The thrower's updated record.
    pub player: Player,
    /// Hits that landed after the target was closed for the thrower.
    pub extra_hits: u32,
    /// Points added to the thrower's score.
    pub points_gained: u32,
    /// Whether this dart closed the target for the thrower.
    pub closed: bool,
}

/// Hits from a throw that land past the closing threshold.
///
/// If the target was already closed every hit is extra; if this throw
/// crosses the threshold only the overflow is.
pub fn extra_hits(current_hits: u32, hits_to_add: u32) -> u32 {
    if current_hits >= HITS_TO_CLOSE {
        hits_to_add
    } else {
        (current_hits + hits_to_add).saturating_sub(HITS_TO_CLOSE)
    }
}

/// Scores one dart for `player`.
///
/// `all_players` is the roster as it stood before this dart and is only
/// used to decide whether the target is dead for scoring. A dart that
/// closes a target for the last open player is judged against that
/// pre-throw roster, so it can still score.
///
/// Invalid targets leave the player unchanged.
#[instrument(
    skip(player, all_players),
    fields(player = %player.name(), multiplier = %multiplier)
)]
pub fn score_throw(
    player: &Player,
    target: u32,
    multiplier: Multiplier,
    all_players: &[Player],
) -> ScoredThrow {
    let Some(t) = Target::from_value(target) else {
        warn!(value = target, "Ignoring throw at unknown target");
        return ScoredThrow {
            player: player.clone(),
            extra_hits: 0,
            points_gained: 0,
            closed: false,
        };
    };

    let hits_to_add = multiplier.hits();
    let before = *player.status(t);
    let new_hits = before.hits() + hits_to_add;
    let extra = extra_hits(before.hits(), hits_to_add);
    let dead = is_locked_globally(target, all_players);

    let mut next = player.clone();
    let status = next.status_mut(t);
    status.hits = new_hits;
    if t.closes() && new_hits >= HITS_TO_CLOSE {
        status.is_locked = true;
    }
    let closed = !before.is_locked() && status.is_locked;

    let points_gained = if t.closes() && extra > 0 && !dead {
        t.value() * extra
    } else {
        0
    };
    if points_gained > 0 {
        status.points += points_gained;
        next.score += points_gained;
    }

    debug!(
        hits = new_hits,
        extra,
        dead,
        points_gained,
        closed,
        "Throw scored"
    );

    ScoredThrow {
        player: next,
        extra_hits: extra,
        points_gained,
        closed,
    }
}

/// Applies one dart to `player`, returning the updated record.
///
/// See [`score_throw`] for the rules; the input is never modified.
#[instrument(skip(player, all_players), fields(player = %player.name()))]
pub fn apply_throw(
    player: &Player,
    target: u32,
    multiplier: Multiplier,
    all_players: &[Player],
) -> Player {
    score_throw(player, target, multiplier, all_players).player
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Player> {
        vec![Player::new("Ana"), Player::new("Bob")]
    }

    #[test]
    fn test_extra_hits_cases() {
        assert_eq!(extra_hits(0, 1), 0);
        assert_eq!(extra_hits(0, 3), 0);
        assert_eq!(extra_hits(2, 2), 1);
        assert_eq!(extra_hits(1, 3), 1);
        assert_eq!(extra_hits(3, 2), 2);
        assert_eq!(extra_hits(7, 3), 3);
    }

    #[test]
    fn test_invalid_target_is_noop() {
        let players = roster();
        let result = score_throw(&players[0], 14, Multiplier::Triples, &players);
        assert_eq!(result.player, players[0]);
        assert_eq!(result.points_gained, 0);
        assert!(!result.closed);
    }

    #[test]
    fn test_triple_closes_without_points() {
        let players = roster();
        let result = score_throw(&players[0], 20, Multiplier::Triples, &players);
        assert_eq!(result.player.status(Target::Twenty).hits(), 3);
        assert!(result.player.status(Target::Twenty).is_locked());
        assert_eq!(result.extra_hits, 0);
        assert_eq!(result.player.score(), 0);
        assert!(result.closed);
    }

    #[test]
    fn test_double_from_two_scores_one_extra() {
        let mut players = roster();
        players[0] = apply_throw(&players[0], 17, Multiplier::Doubles, &players);
        assert_eq!(players[0].status(Target::Seventeen).hits(), 2);

        let result = score_throw(&players[0], 17, Multiplier::Doubles, &players);
        assert_eq!(result.extra_hits, 1);
        assert_eq!(result.points_gained, 17);
        assert_eq!(result.player.score(), 17);
        assert_eq!(result.player.status(Target::Seventeen).hits(), 4);
        assert_eq!(result.player.status(Target::Seventeen).points(), 17);
        assert!(result.player.status(Target::Seventeen).is_locked());
    }

    #[test]
    fn test_closed_target_scores_every_hit() {
        let mut players = roster();
        players[0] = apply_throw(&players[0], 19, Multiplier::Triples, &players);

        let result = score_throw(&players[0], 19, Multiplier::Triples, &players);
        assert_eq!(result.extra_hits, 3);
        assert_eq!(result.points_gained, 57);
        assert!(!result.closed);
    }

    #[test]
    fn test_globally_locked_target_never_scores() {
        let mut players = roster();
        players[0] = apply_throw(&players[0], 18, Multiplier::Triples, &players);
        players[1] = apply_throw(&players[1], 18, Multiplier::Triples, &players);

        let result = score_throw(&players[0], 18, Multiplier::Triples, &players);
        assert_eq!(result.player.status(Target::Eighteen).hits(), 6);
        assert_eq!(result.points_gained, 0);
        assert_eq!(result.player.score(), 0);
    }

    #[test]
    fn test_closing_throw_judged_on_prior_roster() {
        let mut players = roster();
        players[0] = apply_throw(&players[0], 16, Multiplier::Triples, &players);
        players[1] = apply_throw(&players[1], 16, Multiplier::Doubles, &players);

        // Bob's triple closes 16 for everyone, but 16 was still open before it.
        let result = score_throw(&players[1], 16, Multiplier::Triples, &players);
        assert_eq!(result.extra_hits, 2);
        assert_eq!(result.points_gained, 32);
    }

    #[test]
    fn test_miss_accumulates_but_never_locks_or_scores() {
        let players = roster();
        let mut ana = players[0].clone();
        for _ in 0..5 {
            ana = apply_throw(&ana, 0, Multiplier::Triples, &players);
        }
        let status = ana.status(Target::Miss);
        assert_eq!(status.hits(), 15);
        assert!(!status.is_locked());
        assert_eq!(status.points(), 0);
        assert_eq!(ana.score(), 0);
    }

    #[test]
    fn test_input_player_untouched() {
        let players = roster();
        let before = players[0].clone();
        let _ = apply_throw(&players[0], 20, Multiplier::Triples, &players);
        assert_eq!(players[0], before);
    }
}

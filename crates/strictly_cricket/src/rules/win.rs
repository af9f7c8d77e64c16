//! Win detection for Cricket.

use crate::config::GameConfig;
use crate::player::Player;
use crate::state::{GameState, WinNotification, WinReason};
use tracing::{debug, instrument};

/// Highest-scoring player, with ties going to whoever comes first.
#[instrument(skip(players), fields(roster = players.len()))]
pub fn leader(players: &[Player]) -> Option<(usize, &Player)> {
    players
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, &Player)>, (i, p)| match best {
            Some((_, b)) if b.score() >= p.score() => best,
            _ => Some((i, p)),
        })
}

/// Whether the player at `index` outscores every other player.
fn holds_outright_lead(players: &[Player], index: usize) -> bool {
    let Some(candidate) = players.get(index) else {
        return false;
    };
    players
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .all(|(_, p)| candidate.score() > p.score())
}

/// Checks whether the dart just thrown by `thrower_index` ended the game.
///
/// `state` must already include the dart and the turn advance. An early
/// win (every number closed plus the outright lead) is checked before
/// the round limit. A tied lead does not end the game early.
#[instrument(skip(state, config), fields(round = state.current_round()))]
pub fn check_winner(
    state: &GameState,
    thrower_index: usize,
    config: &GameConfig,
) -> Option<WinNotification> {
    let players = state.players();

    if let Some(thrower) = players.get(thrower_index)
        && thrower.has_closed_all()
    {
        if holds_outright_lead(players, thrower_index) {
            return Some(WinNotification::new(
                thrower_index,
                thrower,
                WinReason::ClosedAll,
            ));
        }
        debug!(player = %thrower.name(), "All numbers closed without the outright lead");
    }

    if state.current_round() > config.round_limit() {
        return leader(players)
            .map(|(i, p)| WinNotification::new(i, p, WinReason::RoundLimit));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::turn::TurnCursor;
    use crate::target::Target;

    fn player(name: &str, score: u32, closed_all: bool) -> Player {
        let mut p = Player::new(name);
        p.score = score;
        p.status_mut(Target::Twenty).points = score;
        p.status_mut(Target::Twenty).hits = 3 + score / 20;
        if closed_all {
            for t in Target::closable() {
                let status = p.status_mut(t);
                status.hits = status.hits.max(3);
                status.is_locked = true;
            }
        }
        p
    }

    fn state(players: Vec<Player>, round: u32) -> GameState {
        let mut state = GameState::new(players);
        state.cursor = TurnCursor {
            player_index: 0,
            round,
            throw_number: 1,
        };
        state
    }

    #[test]
    fn test_no_winner_mid_game() {
        let s = state(vec![player("Ana", 40, false), player("Bob", 0, false)], 3);
        assert_eq!(check_winner(&s, 0, &GameConfig::new()), None);
    }

    #[test]
    fn test_early_win_needs_outright_lead() {
        let s = state(vec![player("Ana", 60, true), player("Bob", 20, false)], 5);
        let win = check_winner(&s, 0, &GameConfig::new()).expect("early win");
        assert_eq!(win.winner_name(), "Ana");
        assert_eq!(win.winner_score(), 60);
        assert_eq!(win.reason(), WinReason::ClosedAll);
    }

    #[test]
    fn test_early_win_deferred_on_tie() {
        let s = state(vec![player("Ana", 60, true), player("Bob", 60, false)], 5);
        assert_eq!(check_winner(&s, 0, &GameConfig::new()), None);
    }

    #[test]
    fn test_early_win_only_for_thrower() {
        let s = state(vec![player("Ana", 60, true), player("Bob", 20, false)], 5);
        assert_eq!(check_winner(&s, 1, &GameConfig::new()), None);
    }

    #[test]
    fn test_round_limit_picks_highest() {
        let s = state(vec![player("A", 120, false), player("B", 95, false)], 21);
        let win = check_winner(&s, 1, &GameConfig::new()).expect("round limit win");
        assert_eq!(win.winner_name(), "A");
        assert_eq!(win.winner_score(), 120);
        assert_eq!(win.reason(), WinReason::RoundLimit);
    }

    #[test]
    fn test_round_limit_not_reached_in_final_round() {
        let s = state(vec![player("A", 120, false), player("B", 95, false)], 20);
        assert_eq!(check_winner(&s, 1, &GameConfig::new()), None);
    }

    #[test]
    fn test_round_limit_tie_goes_to_first() {
        let s = state(
            vec![
                player("A", 40, false),
                player("B", 80, false),
                player("C", 80, false),
            ],
            21,
        );
        let win = check_winner(&s, 2, &GameConfig::new()).expect("round limit win");
        assert_eq!(win.winner_name(), "B");
        assert_eq!(win.winner_index(), 1);
    }

    #[test]
    fn test_leader_of_empty_roster() {
        assert!(leader(&[]).is_none());
    }
}

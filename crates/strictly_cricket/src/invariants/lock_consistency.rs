//! Lock consistency invariant: lock flags and points agree with hit counts.

use super::Invariant;
use crate::state::GameState;
use crate::target::HITS_TO_CLOSE;

/// Invariant: a target is locked exactly when it has three or more hits,
/// the miss bucket never locks, and points only exist past the threshold.
pub struct LockConsistencyInvariant;

impl Invariant<GameState> for LockConsistencyInvariant {
    fn holds(state: &GameState) -> bool {
        state.players().iter().all(|player| {
            player.numbers().all(|(target, status)| {
                let should_lock = target.closes() && status.hits() >= HITS_TO_CLOSE;
                let points_ok = status.points() == 0
                    || (target.closes() && status.hits() > HITS_TO_CLOSE);
                status.is_locked() == should_lock && points_ok
            })
        })
    }

    fn description() -> &'static str {
        "Targets lock at three hits (never the miss) and score only past that"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use crate::target::Target;

    fn state() -> GameState {
        GameState::new(vec![Player::new("Ana"), Player::new("Bob")])
    }

    #[test]
    fn test_blank_roster_holds() {
        assert!(LockConsistencyInvariant::holds(&state()));
    }

    #[test]
    fn test_unlocked_at_three_hits_violates() {
        let mut state = state();
        state.players[0].status_mut(Target::Fifteen).hits = 3;
        assert!(!LockConsistencyInvariant::holds(&state));

        state.players[0].status_mut(Target::Fifteen).is_locked = true;
        assert!(LockConsistencyInvariant::holds(&state));
    }

    #[test]
    fn test_locked_miss_violates() {
        let mut state = state();
        let miss = state.players[0].status_mut(Target::Miss);
        miss.hits = 5;
        assert!(LockConsistencyInvariant::holds(&state));

        state.players[0].status_mut(Target::Miss).is_locked = true;
        assert!(!LockConsistencyInvariant::holds(&state));
    }

    #[test]
    fn test_points_without_overflow_violate() {
        let mut state = state();
        let status = state.players[0].status_mut(Target::Sixteen);
        status.hits = 3;
        status.is_locked = true;
        status.points = 16;
        assert!(!LockConsistencyInvariant::holds(&state));
    }
}

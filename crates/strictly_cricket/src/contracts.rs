//! Contract-based validation for darts.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, throw)} throw {Q(before, after)}.

use crate::action::Throw;
use crate::error::ThrowError;
use crate::invariants;
use crate::rules::locking::is_locked_globally;
use crate::state::GameState;
use crate::target::Target;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ThrowError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ThrowError>;
}

// ─────────────────────────────────────────────────────────────
//  Throw Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the target is not closed for every player.
pub struct TargetOpen;

impl TargetOpen {
    /// Rejects darts at a target that is dead for scoring.
    #[instrument(skip(state))]
    pub fn check(throw: &Throw, state: &GameState) -> Result<(), ThrowError> {
        if is_locked_globally(throw.target, state.players()) {
            warn!(value = throw.target, "Target closed for every player");
            Err(ThrowError::TargetClosed {
                target: throw.target,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the segment has a ring for the multiplier.
pub struct SegmentExists;

impl SegmentExists {
    /// Rejects triple bulls and doubled misses.
    #[instrument]
    pub fn check(throw: &Throw) -> Result<(), ThrowError> {
        match Target::from_value(throw.target) {
            Some(t) if !t.accepts(throw.multiplier) => Err(ThrowError::SegmentUnavailable {
                target: throw.target,
                multiplier: throw.multiplier,
            }),
            _ => Ok(()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Throw Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for darts.
///
/// Preconditions:
/// - Target must still be open for someone
///
/// Postconditions:
/// - Roster size unchanged
/// - Hits, scores and locks never go backwards
/// - [`invariants::CricketInvariants`] hold
pub struct ThrowContract;

impl Contract<GameState, Throw> for ThrowContract {
    fn pre(state: &GameState, action: &Throw) -> Result<(), ThrowError> {
        TargetOpen::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), ThrowError> {
        let violation = |description: String| ThrowError::InvariantViolation {
            description: format!("Postcondition failed: {description}"),
        };

        if before.players().len() != after.players().len() {
            return Err(violation("roster size changed".to_string()));
        }

        let regressed = before.players().iter().zip(after.players()).any(|(b, a)| {
            a.score() < b.score()
                || b.numbers().zip(a.numbers()).any(|((_, sb), (_, sa))| {
                    sa.hits() < sb.hits() || (sb.is_locked() && !sa.is_locked())
                })
        });
        if regressed {
            return Err(violation(
                "hits, scores and locks must never decrease".to_string(),
            ));
        }

        invariants::verify(after).map_err(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Multiplier;
    use crate::player::Player;
    use crate::rules::apply_throw;

    fn state() -> GameState {
        GameState::new(vec![Player::new("Ana"), Player::new("Bob")])
    }

    #[test]
    fn test_open_target_passes() {
        let throw = Throw::new(20, Multiplier::Triples);
        assert!(ThrowContract::pre(&state(), &throw).is_ok());
    }

    #[test]
    fn test_globally_closed_target_rejected() {
        let mut state = state();
        let ana = apply_throw(&state.players[0], 20, Multiplier::Triples, &state.players);
        let bob = apply_throw(&state.players[1], 20, Multiplier::Triples, &state.players);
        state = state.with_player(0, ana).with_player(1, bob);

        let result = ThrowContract::pre(&state, &Throw::new(20, Multiplier::Singles));
        assert_eq!(result, Err(ThrowError::TargetClosed { target: 20 }));
        assert!(ThrowContract::pre(&state, &Throw::miss()).is_ok());
    }

    #[test]
    fn test_segment_rings() {
        assert!(SegmentExists::check(&Throw::new(25, Multiplier::Doubles)).is_ok());
        assert_eq!(
            SegmentExists::check(&Throw::new(25, Multiplier::Triples)),
            Err(ThrowError::SegmentUnavailable {
                target: 25,
                multiplier: Multiplier::Triples,
            })
        );
        assert!(SegmentExists::check(&Throw::new(0, Multiplier::Doubles)).is_err());
        assert!(SegmentExists::check(&Throw::new(14, Multiplier::Triples)).is_ok());
    }

    #[test]
    fn test_post_detects_regression() {
        let before = state();
        let ana = apply_throw(&before.players[0], 19, Multiplier::Doubles, &before.players);
        let after = before.with_player(0, ana).advance_turn();

        assert!(ThrowContract::post(&before, &after).is_ok());
        assert!(matches!(
            ThrowContract::post(&after, &before),
            Err(ThrowError::InvariantViolation { .. })
        ));
    }
}

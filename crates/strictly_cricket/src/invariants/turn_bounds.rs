//! Turn bounds invariant: the cursor always points at a real dart.

use super::Invariant;
use crate::rules::turn::THROWS_PER_TURN;
use crate::state::GameState;

/// Invariant: player index in range, dart number in 1..=3, round at least 1.
pub struct TurnBoundsInvariant;

impl Invariant<GameState> for TurnBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        let cursor = state.cursor();
        cursor.player_index < state.players().len()
            && (1..=THROWS_PER_TURN).contains(&cursor.throw_number)
            && cursor.round >= 1
    }

    fn description() -> &'static str {
        "Turn cursor stays within the roster, three darts, and round one onward"
    }
}

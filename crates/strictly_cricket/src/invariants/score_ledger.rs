//! Score ledger invariant: a score is the sum of its per-target points.

use super::Invariant;
use crate::state::GameState;

/// Invariant: every player's score equals the points recorded per target.
pub struct ScoreLedgerInvariant;

impl Invariant<GameState> for ScoreLedgerInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .players()
            .iter()
            .all(|p| p.score() == p.points_total())
    }

    fn description() -> &'static str {
        "Each score equals the sum of its per-target points"
    }
}

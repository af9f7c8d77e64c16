//! Turn and round sequencing.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Darts each player throws per turn.
pub const THROWS_PER_TURN: u32 = 3;

/// Whose dart is next, and where in the game it falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnCursor {
    /// Index of the player to throw.
    pub player_index: usize,
    /// Round number, starting at 1.
    pub round: u32,
    /// Dart within the turn, 1 to 3.
    pub throw_number: u32,
}

impl TurnCursor {
    /// First dart of the first round.
    pub fn start() -> Self {
        Self {
            player_index: 0,
            round: 1,
            throw_number: 1,
        }
    }
}

impl Default for TurnCursor {
    fn default() -> Self {
        Self::start()
    }
}

/// Moves the cursor past one dart.
///
/// After the third dart play passes to the next player. The round
/// advances when play wraps back to the first player from someone else.
#[instrument]
pub fn advance_turn(cursor: TurnCursor, player_count: usize) -> TurnCursor {
    let mut throw_number = cursor.throw_number + 1;
    let mut player_index = cursor.player_index;

    if throw_number > THROWS_PER_TURN {
        throw_number = 1;
        player_index = (cursor.player_index + 1) % player_count.max(1);
    }

    let round = if player_index == 0 && cursor.player_index != 0 {
        cursor.round + 1
    } else {
        cursor.round
    };

    TurnCursor {
        player_index,
        round,
        throw_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throws_within_turn() {
        let cursor = advance_turn(TurnCursor::start(), 2);
        assert_eq!(cursor.player_index, 0);
        assert_eq!(cursor.throw_number, 2);
        assert_eq!(cursor.round, 1);
    }

    #[test]
    fn test_third_dart_passes_turn() {
        let mut cursor = TurnCursor::start();
        for _ in 0..3 {
            cursor = advance_turn(cursor, 3);
        }
        assert_eq!(cursor.player_index, 1);
        assert_eq!(cursor.throw_number, 1);
        assert_eq!(cursor.round, 1);
    }

    #[test]
    fn test_full_rotation_advances_round_once() {
        for players in 2..=4 {
            let start = TurnCursor::start();
            let mut cursor = start;
            let mut round_changes = 0;
            for _ in 0..players * 3 {
                let next = advance_turn(cursor, players);
                if next.round != cursor.round {
                    round_changes += 1;
                }
                cursor = next;
            }
            assert_eq!(round_changes, 1, "{players} players");
            assert_eq!(cursor.round, start.round + 1);
            assert_eq!(cursor.player_index, start.player_index);
            assert_eq!(cursor.throw_number, 1);
        }
    }

    #[test]
    fn test_rotation_from_mid_roster() {
        let start = TurnCursor {
            player_index: 1,
            round: 4,
            throw_number: 1,
        };
        let mut cursor = start;
        for _ in 0..9 {
            cursor = advance_turn(cursor, 3);
        }
        assert_eq!(cursor.player_index, 1);
        assert_eq!(cursor.round, 5);
    }
}

//! Plain-text scoreboard.

use std::fmt::Write;
use strictly_cricket::{GameConfig, GameState, GameStatus, HITS_TO_CLOSE, Player, Target};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Renders the round header and one block per player.
///
/// ```text
/// Round 2/20 | Ana to throw | Dart 1/3
/// > Ana: 60
///     15 0/3 | 16 0/3 | 17 0/3 | 18 0/3 | 19 0/3 | 20 6/3 (60)* | Bull 0/3
///   Bob: 0
///     ...
/// Closed: 20
/// ```
///
/// `*` marks a target the player has closed.
#[instrument(skip(state, config))]
pub fn render(state: &GameState, config: &GameConfig) -> String {
    let mut out = String::new();

    match state.status() {
        GameStatus::InProgress => {
            let current = state.current_player().map(Player::name).unwrap_or("?");
            let _ = writeln!(
                out,
                "Round {}/{} | {} to throw | Dart {}/3",
                state.current_round(),
                config.round_limit(),
                current,
                state.current_throw()
            );
        }
        GameStatus::Finished(winner) => {
            let _ = writeln!(out, "Game over: {winner}");
        }
    }

    for (i, player) in state.players().iter().enumerate() {
        let marker = if i == state.current_player_index()
            && state.status() == &GameStatus::InProgress
        {
            '>'
        } else {
            ' '
        };
        let _ = writeln!(out, "{marker} {}: {}", player.name(), player.score());
        let _ = writeln!(out, "    {}", target_row(player));
    }

    if !state.locked_targets().is_empty() {
        let closed: Vec<String> = state.locked_targets().iter().map(|t| t.label()).collect();
        let _ = writeln!(out, "Closed: {}", closed.join(", "));
    }

    out
}

/// One player's marks, e.g. `15 2/3 | 20 5/3 (40)*`.
fn target_row(player: &Player) -> String {
    Target::iter()
        .filter(|t| t.closes())
        .map(|t| {
            let status = player.status(t);
            let mut cell = format!("{} {}/{}", t.label(), status.hits(), HITS_TO_CLOSE);
            if status.points() > 0 {
                let _ = write!(cell, " ({})", status.points());
            }
            if status.is_locked() {
                cell.push('*');
            }
            cell
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_cricket::{Multiplier, Session};

    #[test]
    fn test_fresh_board() {
        let session = Session::start(&["Ana", "Bob"], GameConfig::new()).unwrap();
        let text = render(session.state(), &GameConfig::new());
        assert!(text.starts_with("Round 1/20 | Ana to throw | Dart 1/3"));
        assert!(text.contains("> Ana: 0"));
        assert!(text.contains("  Bob: 0"));
        assert!(text.contains("Bull 0/3"));
        assert!(!text.contains("Out"));
        assert!(!text.contains("Closed:"));
    }

    #[test]
    fn test_marks_points_and_closed_targets() {
        let mut session = Session::start(&["Ana", "Bob"], GameConfig::new()).unwrap();
        session.throw(20, Multiplier::Triples).unwrap();
        session.throw(20, Multiplier::Doubles).unwrap();
        session.throw(0, Multiplier::Singles).unwrap();
        session.throw(20, Multiplier::Triples).unwrap();

        let text = render(session.state(), &GameConfig::new());
        assert!(text.contains("Ana: 40"));
        assert!(text.contains("20 5/3 (40)*"));
        assert!(text.contains("Closed: 20"));
        assert!(text.contains("Bob to throw | Dart 2/3"));
    }
}

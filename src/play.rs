//! Interactive scoring loop over any line-based input.

use crate::scoreboard;
use std::io::{BufRead, Write};
use strictly_cricket::{GameConfig, Session, Throw, WinNotification};
use tracing::{debug, instrument, warn};

/// Reads one dart per line until the game ends or the input runs out.
///
/// Besides throw notation the loop accepts `board` (reprint) and
/// `quit`. Bad input and rejected darts are reported and play goes on.
/// Returns the winner if the game finished.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    rules: &GameConfig,
    input: R,
    out: &mut W,
) -> anyhow::Result<Option<WinNotification>> {
    write!(out, "{}", scoreboard::render(session.state(), rules))?;

    for line in input.lines() {
        let line = line?;
        let text = line.trim();
        match text.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                debug!("Player quit");
                return Ok(None);
            }
            "board" => {
                write!(out, "{}", scoreboard::render(session.state(), rules))?;
                continue;
            }
            _ => {}
        }

        let throw = match text.parse::<Throw>() {
            Ok(throw) => throw,
            Err(e) => {
                writeln!(out, "! {e}")?;
                continue;
            }
        };

        let report = match session.play(throw) {
            Ok(report) => report,
            Err(e) => {
                warn!(%throw, error = %e, "Dart rejected");
                writeln!(out, "! {e}")?;
                continue;
            }
        };

        match report.record() {
            None => writeln!(out, "! {throw} is not a Cricket target, ignored")?,
            Some(record) if record.points_gained > 0 => {
                writeln!(out, "{throw}: +{}", record.points_gained)?
            }
            Some(record) if record.closed => writeln!(out, "{throw}: closed")?,
            Some(_) => writeln!(out, "{throw}")?,
        }

        write!(out, "{}", scoreboard::render(session.state(), rules))?;

        if let Some(winner) = report.winner() {
            return Ok(Some(winner.clone()));
        }
    }

    Ok(None)
}

use crate::core::session::GameSession;
use crate::core::{DisplayOptions, ProgressRow, RankingEntry, ScoreRow, SummaryFormat};
use crate::utils::error::{Result, ScoreError};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct Summary<'a> {
    progress: Vec<ProgressRow<'a>>,
    scores: Option<Vec<ScoreRow>>,
    ranking: Option<Vec<RankingEntry>>,
    /// Why scores are missing, when the game is not finished.
    pending: Option<String>,
}

/// Splits a snapshot into "final" and "not yet". Other errors propagate.
fn settle<T>(result: Result<T>) -> Result<std::result::Result<T, ScoreError>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(e @ ScoreError::IncompleteGame { .. }) => Ok(Err(e)),
        Err(e) => Err(e),
    }
}

fn write_rolls<W: Write>(out: &mut W, session: &GameSession, width: usize) -> Result<()> {
    for row in session.progress_snapshot() {
        write!(out, "{}:\t", row.name)?;
        for pins in row.rolls {
            write!(out, "{:>width$} ", pins, width = width)?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_progress<W: Write>(
    out: &mut W,
    session: &GameSession,
    display: DisplayOptions,
) -> Result<()> {
    writeln!(out, "Game Progress")?;
    write_rolls(out, session, display.roll_width)
}

/// Cumulative frame scores. An unfinished game prints a notice instead of
/// partial numbers.
pub fn write_scores<W: Write>(
    out: &mut W,
    session: &GameSession,
    display: DisplayOptions,
) -> Result<()> {
    writeln!(out, "Current Scores")?;
    match settle(session.score_snapshot())? {
        Ok(rows) => {
            for row in rows {
                write!(out, "{}:\t", row.name)?;
                for total in row.frames.iter() {
                    write!(out, "{:>width$} ", total, width = display.score_width)?;
                }
                writeln!(out)?;
            }
        }
        Err(pending) => {
            tracing::debug!("Score snapshot pending: {}", pending);
            writeln!(out, "Scores are not final yet: {}", pending)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_ranking<W: Write>(out: &mut W, ranking: &[RankingEntry]) -> Result<()> {
    writeln!(out, "Player Ranking")?;
    for (i, entry) in ranking.iter().enumerate() {
        writeln!(out, "{}. {}: {} points", i + 1, entry.name, entry.score)?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(
    out: &mut W,
    session: &GameSession,
    display: DisplayOptions,
) -> Result<()> {
    match display.summary_format {
        SummaryFormat::Table => {
            writeln!(out, "Game Summary")?;
            write_rolls(out, session, display.roll_width)?;
            write_scores(out, session, display)?;
            if let Ok(ranking) = settle(session.ranking())? {
                write_ranking(out, &ranking)?;
            }
        }
        SummaryFormat::Json => {
            let (scores, ranking, pending) = match settle(session.score_snapshot())? {
                Ok(rows) => {
                    let ranking = session.ranking()?;
                    (Some(rows), Some(ranking), None)
                }
                Err(e) => (None, None, Some(e.user_friendly_message())),
            };
            let summary = Summary {
                progress: session.progress_snapshot(),
                scores,
                ranking,
                pending,
            };
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

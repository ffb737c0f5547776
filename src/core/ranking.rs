use crate::domain::model::{RankingEntry, ScoreRow};

/// Orders players by final score, highest first.
///
/// Ties keep roster order.
pub fn rank(rows: &[ScoreRow]) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = rows
        .iter()
        .map(|row| RankingEntry {
            name: row.name.clone(),
            score: row.frames.final_score(),
        })
        .collect();

    // sort_by is stable
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}

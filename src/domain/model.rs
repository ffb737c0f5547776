use serde::{Deserialize, Serialize};

/// Frames in one game.
pub const FRAMES: usize = 10;
/// Seats at one lane.
pub const MAX_PLAYERS: usize = 5;
/// Pins standing at the start of a frame.
pub const PINS: u8 = 10;

/// Ten running totals, frame 1 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameScores([u32; FRAMES]);

impl FrameScores {
    pub fn new(cumulative: [u32; FRAMES]) -> Self {
        Self(cumulative)
    }

    /// Cumulative score after `frame` (1-based).
    pub fn frame(&self, frame: usize) -> Option<u32> {
        frame.checked_sub(1).and_then(|i| self.0.get(i)).copied()
    }

    pub fn final_score(&self) -> u32 {
        self.0[FRAMES - 1]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

/// One player's recorded rolls, as shown in the progress view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressRow<'a> {
    pub name: &'a str,
    pub rolls: &'a [u8],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRow {
    pub name: String,
    pub frames: FrameScores,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub name: String,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_accessor_is_one_based() {
        let scores = FrameScores::new([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(scores.frame(1), Some(1));
        assert_eq!(scores.frame(10), Some(10));
        assert_eq!(scores.frame(0), None);
        assert_eq!(scores.frame(11), None);
        assert_eq!(scores.final_score(), 10);
    }
}

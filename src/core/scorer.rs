//! Ten-pin frame scoring.
//!
//! A strike consumes one roll and scores the next two as bonus. A spare
//! consumes two rolls and scores the one after as bonus. The tenth frame
//! has no special case: its bonus rolls are simply the trailing rolls the
//! lookahead reads.

use crate::domain::model::{FrameScores, FRAMES, PINS};

/// Where scoring ran out of rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    /// 1-based frame that could not be resolved.
    pub frame: usize,
    pub recorded: usize,
}

struct Cursor<'a> {
    rolls: &'a [u8],
    pos: usize,
    frame: usize,
}

impl Cursor<'_> {
    /// Roll `offset` places past the cursor.
    fn peek(&self, offset: usize) -> Result<u32, Shortfall> {
        self.rolls
            .get(self.pos + offset)
            .map(|&pins| u32::from(pins))
            .ok_or(Shortfall {
                frame: self.frame,
                recorded: self.rolls.len(),
            })
    }
}

/// Cumulative scores for frames 1 through 10.
///
/// Rolls past the last one any frame reads are ignored. Reading past the
/// end of `rolls` is reported as a [`Shortfall`] rather than guessed.
pub fn score_frames(rolls: &[u8]) -> Result<FrameScores, Shortfall> {
    let mut cursor = Cursor {
        rolls,
        pos: 0,
        frame: 1,
    };
    let mut total = 0u32;
    let mut cumulative = [0u32; FRAMES];

    for (i, slot) in cumulative.iter_mut().enumerate() {
        cursor.frame = i + 1;
        let first = cursor.peek(0)?;

        let value = if first == u32::from(PINS) {
            let value = first + cursor.peek(1)? + cursor.peek(2)?;
            cursor.pos += 1;
            value
        } else {
            let mut value = first + cursor.peek(1)?;
            if value == u32::from(PINS) {
                value += cursor.peek(2)?;
            }
            cursor.pos += 2;
            value
        };

        total += value;
        *slot = total;
    }

    Ok(FrameScores::new(cumulative))
}

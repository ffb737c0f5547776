//! Pin-count checks for rolls typed at the lane.
//!
//! The scoring core trusts its input, so everything that could make a
//! ledger nonsensical is rejected here, before a roll is submitted.

use crate::domain::model::PINS;
use crate::utils::error::{Result, ScoreError};

/// Parses one roll, given how many pins are still standing.
pub fn parse_pins(text: &str, standing: u8) -> Result<u8> {
    let trimmed = text.trim();
    let value: i64 = trimmed.parse().map_err(|_| ScoreError::InvalidPins {
        value: trimmed.to_string(),
        reason: "Pins should be a whole number".to_string(),
    })?;

    if !(0..=i64::from(PINS)).contains(&value) {
        return Err(ScoreError::InvalidPins {
            value: trimmed.to_string(),
            reason: format!("Pins should be between 0 and {}", PINS),
        });
    }

    let pins = value as u8;
    if pins > standing {
        return Err(ScoreError::InvalidPins {
            value: trimmed.to_string(),
            reason: format!(
                "Only {} pins are standing, and the frame total should not exceed {}",
                standing, PINS
            ),
        });
    }

    Ok(pins)
}

/// Pins standing for the next ball after knocking down `pins` of `standing`.
///
/// Clearing the deck resets the rack, which only matters for bonus balls.
pub fn standing_after(standing: u8, pins: u8) -> u8 {
    if pins >= standing {
        PINS
    } else {
        standing - pins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pins_accepts_full_rack() {
        assert_eq!(parse_pins("0", PINS).unwrap(), 0);
        assert_eq!(parse_pins(" 10 \n", PINS).unwrap(), 10);
    }

    #[test]
    fn test_parse_pins_rejects_out_of_range() {
        assert!(parse_pins("11", PINS).is_err());
        assert!(parse_pins("-1", PINS).is_err());
        assert!(parse_pins("seven", PINS).is_err());
        assert!(parse_pins("", PINS).is_err());
    }

    #[test]
    fn test_second_roll_cannot_exceed_frame() {
        let standing = standing_after(PINS, 7);
        assert_eq!(standing, 3);
        assert_eq!(parse_pins("3", standing).unwrap(), 3);

        let err = parse_pins("4", standing).unwrap_err();
        assert!(err.user_friendly_message().contains("Only 3 pins"));
    }

    #[test]
    fn test_strike_resets_rack() {
        assert_eq!(standing_after(PINS, 10), PINS);
        assert_eq!(standing_after(4, 4), PINS);
    }
}

/// Append-only pin counts for one player's game.
///
/// Values are stored as given; range checks belong to whoever reads the
/// lane, and completeness is the scorer's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollLedger {
    rolls: Vec<u8>,
}

impl RollLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pins: u8) {
        self.rolls.push(pins);
    }

    pub fn all(&self) -> &[u8] {
        &self.rolls
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_order() {
        let mut ledger = RollLedger::new();
        assert!(ledger.is_empty());

        ledger.record(7);
        ledger.record(3);
        ledger.record(10);

        assert_eq!(ledger.all(), &[7, 3, 10]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_record_does_not_validate() {
        let mut ledger = RollLedger::new();
        ledger.record(42);
        assert_eq!(ledger.all(), &[42]);
    }
}

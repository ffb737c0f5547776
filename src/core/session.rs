use crate::core::ledger::RollLedger;
use crate::core::ranking::rank;
use crate::core::scorer::score_frames;
use crate::domain::model::{ProgressRow, RankingEntry, ScoreRow, MAX_PLAYERS};
use crate::utils::error::{Result, ScoreError};

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    ledger: RollLedger,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: RollLedger::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ledger(&self) -> &RollLedger {
        &self.ledger
    }
}

/// Roster and roll history for one game on one lane.
///
/// The session keeps no phase state: players can be added, rolls submitted
/// and scores requested in any order. Scores are recomputed from the ledgers
/// on every call.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    players: Vec<Player>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats a new player at the end of the roster. Names need not be unique.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<()> {
        if self.is_full() {
            tracing::debug!("Roster full, refusing player");
            return Err(ScoreError::RosterFull { max: MAX_PLAYERS });
        }

        let player = Player::new(name);
        tracing::debug!(seat = self.players.len(), name = %player.name, "Player seated");
        self.players.push(player);
        Ok(())
    }

    /// Appends `pins` to every player's ledger.
    pub fn submit_roll(&mut self, pins: u8) {
        tracing::trace!(pins, players = self.players.len(), "Shared roll");
        for player in &mut self.players {
            player.ledger.record(pins);
        }
    }

    /// Appends `pins` to the ledger of the player in `seat` (0-based).
    pub fn submit_roll_for(&mut self, seat: usize, pins: u8) -> Result<()> {
        let players = self.players.len();
        let player = self
            .players
            .get_mut(seat)
            .ok_or(ScoreError::UnknownPlayer { seat, players })?;

        tracing::trace!(seat, pins, "Roll recorded");
        player.ledger.record(pins);
        Ok(())
    }

    pub fn progress_snapshot(&self) -> Vec<ProgressRow<'_>> {
        self.players
            .iter()
            .map(|p| ProgressRow {
                name: &p.name,
                rolls: p.ledger.all(),
            })
            .collect()
    }

    /// Ten running totals per player, roster order.
    ///
    /// Fails with [`ScoreError::IncompleteGame`] for the first player whose
    /// ledger cannot resolve every frame yet.
    pub fn score_snapshot(&self) -> Result<Vec<ScoreRow>> {
        self.players
            .iter()
            .map(|p| {
                let frames =
                    score_frames(p.ledger.all()).map_err(|short| ScoreError::IncompleteGame {
                        player: p.name.clone(),
                        frame: short.frame,
                        recorded: short.recorded,
                    })?;
                Ok(ScoreRow {
                    name: p.name.clone(),
                    frames,
                })
            })
            .collect()
    }

    pub fn ranking(&self) -> Result<Vec<RankingEntry>> {
        let rows = self.score_snapshot()?;
        Ok(rank(&rows))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_PLAYERS
    }
}

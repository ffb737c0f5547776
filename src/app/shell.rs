use crate::app::input::{parse_pins, standing_after};
use crate::app::report;
use crate::core::session::GameSession;
use crate::core::{ConfigProvider, DisplayOptions};
use crate::domain::model::{FRAMES, MAX_PLAYERS, PINS};
use crate::utils::error::{Result, ScoreError};
use std::io::{BufRead, Write};

/// Whether the menu loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Text-menu front end over a [`GameSession`].
///
/// Reads answers line by line from `input` and writes prompts and reports
/// to `output`. End of input is treated like choosing `0`.
pub struct Shell<R: BufRead, W: Write> {
    session: GameSession,
    display: DisplayOptions,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(session: GameSession, display: DisplayOptions, input: R, output: W) -> Self {
        Self {
            session,
            display,
            input,
            output,
        }
    }

    /// Builds a shell with the configured players already seated.
    pub fn from_config<C: ConfigProvider>(config: &C, input: R, output: W) -> Result<Self> {
        let mut session = GameSession::new();
        for name in config.seed_players() {
            session.add_player(name.as_str())?;
        }
        Ok(Self::new(session, config.display(), input, output))
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn into_session(self) -> GameSession {
        self.session
    }

    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Menu started with {} player(s)", self.session.len());
        loop {
            writeln!(self.output, "Menu:")?;
            writeln!(self.output, "1. Add Player")?;
            writeln!(self.output, "2. Enter Scores")?;
            writeln!(self.output, "3. Display Game Progress")?;
            writeln!(self.output, "4. Display Game Summary")?;
            writeln!(self.output, "0. Exit")?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            let flow = match choice.trim() {
                "1" => self.add_player()?,
                "2" => self.enter_scores()?,
                "3" => {
                    report::write_progress(&mut self.output, &self.session, self.display)?;
                    Flow::Continue
                }
                "4" => {
                    report::write_summary(&mut self.output, &self.session, self.display)?;
                    Flow::Continue
                }
                "0" => Flow::Exit,
                other => {
                    tracing::debug!("Unknown menu option {:?}", other);
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "Exiting the program.")?;
        self.output.flush()?;
        tracing::info!("Menu closed");
        Ok(())
    }

    fn add_player(&mut self) -> Result<Flow> {
        if self.session.is_full() {
            writeln!(
                self.output,
                "Maximum number of players reached ({}).",
                MAX_PLAYERS
            )?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.prompt("Enter player name: ")? else {
            return Ok(Flow::Exit);
        };

        match self.session.add_player(name.trim_end_matches(['\r', '\n'])) {
            Ok(()) => writeln!(self.output, "Player added.")?,
            Err(e @ ScoreError::RosterFull { .. }) => {
                writeln!(self.output, "{}", e.user_friendly_message())?
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn enter_scores(&mut self) -> Result<Flow> {
        if self.session.is_empty() {
            writeln!(
                self.output,
                "No players added yet. Please add players first."
            )?;
            return Ok(Flow::Continue);
        }

        let players = self.session.len();
        for frame in 1..=FRAMES {
            for seat in 0..players {
                if self.bowl_frame(frame, seat)? == Flow::Exit {
                    return Ok(Flow::Exit);
                }

                let last_ball = frame == FRAMES && seat + 1 == players;
                if players > 1 && !last_ball {
                    let next = &self.session.players()[(seat + 1) % players];
                    writeln!(self.output, "Next player: {}", next.name())?;
                }
                report::write_progress(&mut self.output, &self.session, self.display)?;
            }
        }

        tracing::info!("All {} frames entered for {} player(s)", FRAMES, players);
        Ok(Flow::Continue)
    }

    /// Reads and records one frame for the player in `seat`.
    ///
    /// A strike records a single roll. In the last frame a strike earns two
    /// bonus balls and a spare one, so the ledger can be scored to the end.
    pub fn bowl_frame(&mut self, frame: usize, seat: usize) -> Result<Flow> {
        let players = self.session.len();
        let name = self
            .session
            .players()
            .get(seat)
            .map(|p| p.name().to_string())
            .ok_or(ScoreError::UnknownPlayer { seat, players })?;

        writeln!(self.output, "Enter scores for {}, Frame {}", name, frame)?;

        let Some(first) = self.read_pins("  Roll 1: ", PINS)? else {
            return Ok(Flow::Exit);
        };
        self.session.submit_roll_for(seat, first)?;

        let bonus_balls = if first == PINS {
            2
        } else {
            let Some(second) = self.read_pins("  Roll 2: ", PINS - first)? else {
                return Ok(Flow::Exit);
            };
            self.session.submit_roll_for(seat, second)?;
            if first + second == PINS {
                1
            } else {
                0
            }
        };

        if frame == FRAMES {
            let mut standing = PINS;
            for ball in 1..=bonus_balls {
                let label = format!("  Bonus roll {}: ", ball);
                let Some(pins) = self.read_pins(&label, standing)? else {
                    return Ok(Flow::Exit);
                };
                self.session.submit_roll_for(seat, pins)?;
                standing = standing_after(standing, pins);
            }
        }

        tracing::debug!(frame, seat, "Frame recorded");
        Ok(Flow::Continue)
    }

    /// Asks until a valid pin count is given. `None` at end of input.
    fn read_pins(&mut self, label: &str, standing: u8) -> Result<Option<u8>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse_pins(&line, standing) {
                Ok(pins) => return Ok(Some(pins)),
                Err(e) => {
                    tracing::debug!("Rejected roll: {}", e);
                    writeln!(self.output, "{}", e.user_friendly_message())?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

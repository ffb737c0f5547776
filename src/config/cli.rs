use crate::config::toml_config::LaneConfig;
use crate::core::SummaryFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "lane-score")]
#[command(about = "Interactive ten-pin bowling scorekeeper for up to five players")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seat players before the menu opens (repeatable or comma separated)
    #[arg(long = "player", value_delimiter = ',')]
    pub players: Vec<String>,

    #[arg(long)]
    pub roll_width: Option<usize>,

    #[arg(long)]
    pub score_width: Option<usize>,

    /// Summary output: table or json
    #[arg(long)]
    pub summary_format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file, if any, and lays the command-line flags over it.
    pub fn resolve(&self) -> Result<LaneConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                LaneConfig::from_file(path)?
            }
            None => LaneConfig::default(),
        };

        if !self.players.is_empty() {
            config.session.players = self.players.clone();
        }
        if self.roll_width.is_some() {
            config.display.roll_width = self.roll_width;
        }
        if self.score_width.is_some() {
            config.display.score_width = self.score_width;
        }
        if self.summary_format.is_some() {
            config.display.summary_format = self.summary_format.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(format) = &self.summary_format {
            validation::validate_one_of("summary_format", format, &SummaryFormat::NAMES)?;
        }
        Ok(())
    }
}

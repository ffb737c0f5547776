use crate::core::{ConfigProvider, DisplayOptions, SummaryFormat};
use crate::domain::model::MAX_PLAYERS;
use crate::utils::error::{Result, ScoreError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_COLUMN_WIDTH: usize = 8;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneConfig {
    pub session: SessionConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub players: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub roll_width: Option<usize>,
    pub score_width: Option<usize>,
    pub summary_format: Option<String>,
}

impl LaneConfig {
    /// Loads a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScoreError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses config text, expanding `${VAR}` references first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScoreError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScoreError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_roster("session.players", &self.session.players, MAX_PLAYERS)?;

        if let Some(width) = self.display.roll_width {
            validation::validate_range("display.roll_width", width, 1, MAX_COLUMN_WIDTH)?;
        }
        if let Some(width) = self.display.score_width {
            validation::validate_range("display.score_width", width, 1, MAX_COLUMN_WIDTH)?;
        }
        if let Some(format) = &self.display.summary_format {
            validation::validate_one_of("display.summary_format", format, &SummaryFormat::NAMES)?;
        }

        Ok(())
    }
}

impl ConfigProvider for LaneConfig {
    fn seed_players(&self) -> &[String] {
        &self.session.players
    }

    fn display(&self) -> DisplayOptions {
        let defaults = DisplayOptions::default();
        DisplayOptions {
            roll_width: self.display.roll_width.unwrap_or(defaults.roll_width),
            score_width: self.display.score_width.unwrap_or(defaults.score_width),
            summary_format: self
                .display
                .summary_format
                .as_deref()
                .and_then(SummaryFormat::parse)
                .unwrap_or(defaults.summary_format),
        }
    }
}

impl Validate for LaneConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[session]
players = ["Ann", "Bob"]

[display]
roll_width = 3
summary_format = "json"
"#;

        let config = LaneConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.seed_players(), &["Ann".to_string(), "Bob".to_string()]);
        let display = config.display();
        assert_eq!(display.roll_width, 3);
        assert_eq!(display.score_width, 3);
        assert_eq!(display.summary_format, SummaryFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = LaneConfig::from_toml_str("").unwrap();
        assert!(config.seed_players().is_empty());
        assert_eq!(config.display(), DisplayOptions::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LANE_SCORE_TEST_BOWLER", "Dana");

        let toml_content = r#"
[session]
players = ["${LANE_SCORE_TEST_BOWLER}", "${LANE_SCORE_TEST_UNSET}"]
"#;

        let config = LaneConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.session.players[0], "Dana");
        assert_eq!(config.session.players[1], "${LANE_SCORE_TEST_UNSET}");

        std::env::remove_var("LANE_SCORE_TEST_BOWLER");
    }

    #[test]
    fn test_config_validation() {
        let too_many = r#"
[session]
players = ["A", "B", "C", "D", "E", "F"]
"#;
        let config = LaneConfig::from_toml_str(too_many).unwrap();
        assert!(config.validate().is_err());

        let bad_format = r#"
[display]
summary_format = "xml"
"#;
        let config = LaneConfig::from_toml_str(bad_format).unwrap();
        assert!(config.validate().is_err());

        let bad_width = r#"
[display]
score_width = 0
"#;
        let config = LaneConfig::from_toml_str(bad_width).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = LaneConfig::from_toml_str("[session\nplayers = 1").unwrap_err();
        assert!(matches!(err, ScoreError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[session]
players = ["File Bowler"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = LaneConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.session.players, vec!["File Bowler".to_string()]);
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Roster is full: at most {max} players can join a game")]
    RosterFull { max: usize },

    #[error("Game incomplete for {player}: frame {frame} needs more rolls than the {recorded} recorded")]
    IncompleteGame {
        player: String,
        frame: usize,
        recorded: usize,
    },

    #[error("No player in seat {seat} (roster has {players})")]
    UnknownPlayer { seat: usize, players: usize },

    #[error("Invalid pins '{value}': {reason}")]
    InvalidPins { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Roster,
    Scoring,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScoreError::RosterFull { .. } | ScoreError::UnknownPlayer { .. } => ErrorCategory::Roster,
            ScoreError::IncompleteGame { .. } => ErrorCategory::Scoring,
            ScoreError::InvalidPins { .. } => ErrorCategory::Input,
            ScoreError::ConfigValidationError { .. }
            | ScoreError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ScoreError::IoError(_) | ScoreError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Everything the session raises is recoverable at the call site.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Roster | ErrorCategory::Scoring | ErrorCategory::Input => {
                ErrorSeverity::Low
            }
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => match self {
                ScoreError::SerializationError(_) => ErrorSeverity::High,
                _ => ErrorSeverity::Critical,
            },
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScoreError::RosterFull { max } => {
                format!("Start a new game to seat more than {} players", max)
            }
            ScoreError::IncompleteGame { player, .. } => format!(
                "Keep entering rolls for {}; scores become final once every frame and bonus is bowled",
                player
            ),
            ScoreError::UnknownPlayer { players, .. } => {
                format!("Pick a seat between 0 and {}", players.saturating_sub(1))
            }
            ScoreError::InvalidPins { .. } => {
                "Enter a whole number of pins between 0 and 10".to_string()
            }
            ScoreError::IoError(_) => "Check that the terminal or input file is readable".to_string(),
            ScoreError::SerializationError(_) => {
                "Switch the summary format back to 'table'".to_string()
            }
            ScoreError::ConfigValidationError { field, .. }
            | ScoreError::InvalidConfigValueError { field, .. } => {
                format!("Fix '{}' in the config file or on the command line", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScoreError::RosterFull { max } => format!("Maximum number of players reached ({}).", max),
            ScoreError::IncompleteGame { player, frame, .. } => format!(
                "Scores for {} are not final yet (frame {} is still open).",
                player, frame
            ),
            ScoreError::InvalidPins { reason, .. } => format!("Invalid input. {}.", reason),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;

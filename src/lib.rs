pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::shell::Shell;
pub use crate::config::LaneConfig;
pub use crate::core::{scorer::score_frames, session::GameSession};
pub use crate::domain::model::{FrameScores, RankingEntry, ScoreRow, FRAMES, MAX_PLAYERS, PINS};
pub use crate::utils::error::{Result, ScoreError};

pub mod ledger;
pub mod ranking;
pub mod scorer;
pub mod session;

pub use crate::domain::model::{FrameScores, ProgressRow, RankingEntry, ScoreRow};
pub use crate::domain::ports::{ConfigProvider, DisplayOptions, SummaryFormat};
pub use crate::utils::error::Result;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Table,
    Json,
}

impl SummaryFormat {
    pub const NAMES: [&'static str; 2] = ["table", "json"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "table" => Some(SummaryFormat::Table),
            "json" => Some(SummaryFormat::Json),
            _ => None,
        }
    }
}

/// Column layout for the progress, score and summary views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub roll_width: usize,
    pub score_width: usize,
    pub summary_format: SummaryFormat,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            roll_width: 2,
            score_width: 3,
            summary_format: SummaryFormat::Table,
        }
    }
}

pub trait ConfigProvider {
    /// Players seated before the menu opens.
    fn seed_players(&self) -> &[String];
    fn display(&self) -> DisplayOptions;
}

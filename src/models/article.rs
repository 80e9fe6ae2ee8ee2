use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recent article card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// Publication day. Serialized and rendered as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub description: String,
    pub link: String,
}

impl Article {
    /// Display form of the publication date.
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

//! Annotation (blame) data model

use chrono::{DateTime, Local};

/// Blame information for a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationLine {
    /// Change ID as printed by `jj file annotate`
    pub change_id: String,
    /// Author name
    pub author: String,
    /// Timestamp text (YYYY-MM-DD HH:MM:SS, local time, no zone)
    pub timestamp_text: String,
    /// Timestamp as an absolute instant; `None` when the text does not
    /// name a valid local time
    pub timestamp: Option<DateTime<Local>>,
    /// 1-based line number
    pub line_number: usize,
    /// Line content
    pub content: String,
}

impl AnnotationLine {
    /// Get short timestamp for display (MM-DD)
    pub fn short_timestamp(&self) -> String {
        match self.timestamp {
            Some(ts) => ts.format("%m-%d").to_string(),
            None => self.timestamp_text.clone(),
        }
    }

    /// Get truncated author name for display
    pub fn short_author(&self, max_len: usize) -> String {
        if self.author.chars().count() <= max_len {
            self.author.clone()
        } else {
            self.author
                .chars()
                .take(max_len.saturating_sub(1))
                .collect::<String>()
                + "…"
        }
    }
}

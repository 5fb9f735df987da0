//! Diff summary parser (jj diff --summary)

use super::{DIFF_SUMMARY_REGEX, Parser};
use crate::model::DiffSummaryEntry;

impl Parser {
    /// Parse `jj diff --summary` output
    ///
    /// Formats:
    /// - "A path" (added)
    /// - "M path" (modified)
    /// - "D path" (deleted)
    /// - "R prefix{old => new}" (renamed)
    ///
    /// Every well-formed line is returned; only `A` and `M` take part in
    /// classification.
    pub fn parse_diff_summary(output: &str) -> Vec<DiffSummaryEntry> {
        output
            .lines()
            .filter_map(Self::parse_diff_summary_line)
            .collect()
    }

    pub(super) fn parse_diff_summary_line(line: &str) -> Option<DiffSummaryEntry> {
        let caps = DIFF_SUMMARY_REGEX.captures(line)?;
        let letter = caps.get(1)?.as_str().chars().next()?;
        let path = caps.get(2)?.as_str().to_string();

        Some(DiffSummaryEntry {
            letter,
            path,
            raw: line.to_string(),
        })
    }
}

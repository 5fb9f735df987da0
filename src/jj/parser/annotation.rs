//! File annotation parser (jj file annotate)

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use super::{ANNOTATE_LINE_REGEX, ANNOTATE_TIMESTAMP_FORMAT, Parser};
use crate::model::AnnotationLine;

impl Parser {
    /// Parse `jj file annotate` default output
    ///
    /// Lines that do not match the annotate format are skipped.
    pub fn parse_file_annotate(output: &str) -> Vec<AnnotationLine> {
        output
            .lines()
            .filter(|line| !line.is_empty())
            .filter_map(Self::parse_annotate_line)
            .collect()
    }

    /// Parse a single line of `jj file annotate` default output using regex
    ///
    /// Format: `<change_id> <author> <timestamp>    <line_number>: <content>`
    /// Example: `twzksoxt alice 2026-01-30 10:43:19    1: fn main() {`
    ///
    /// The timestamp has no zone and is read as local time. If it does not
    /// name a valid local instant the line is still returned, with
    /// `timestamp` set to `None`.
    pub fn parse_annotate_line(line: &str) -> Option<AnnotationLine> {
        let caps = ANNOTATE_LINE_REGEX.captures(line)?;

        let change_id = caps.get(1)?.as_str().to_string();
        let author = caps.get(2)?.as_str().trim().to_string();
        let timestamp_text = caps.get(3)?.as_str().to_string();
        let line_number: usize = caps.get(4)?.as_str().parse().ok()?;
        let content = caps
            .get(5)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let timestamp = parse_local_timestamp(&timestamp_text);
        if timestamp.is_none() {
            tracing::warn!(timestamp = %timestamp_text, "unparseable annotate timestamp");
        }

        Some(AnnotationLine {
            change_id,
            author,
            timestamp_text,
            timestamp,
            line_number,
            content,
        })
    }
}

/// Interpret `YYYY-MM-DD HH:MM:SS` in the local timezone
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant; times
/// skipped by a DST jump yield `None`.
fn parse_local_timestamp(text: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(text, ANNOTATE_TIMESTAMP_FORMAT).ok()?;
    Local.from_local_datetime(&naive).earliest()
}

//! jj output parser
//!
//! Parses the output from jj commands into structured data.

mod annotation;
mod diff_summary;
mod file_list;
mod record;
mod resolve;
mod revisions;


use regex::Regex;
use std::sync::LazyLock;

/// Regex for parsing jj file annotate default output
/// Format: `<change_id> <author> <timestamp>    <line_number>: <content>`
/// Example: `twzksoxt alice 2026-01-30 10:43:19    1: fn main() {`
///
/// Groups:
/// 1. change_id (lowercase letters, jj's reversed-hex alphabet)
/// 2. author (between change_id and timestamp, may contain spaces)
/// 3. timestamp (YYYY-MM-DD HH:MM:SS, local time)
/// 4. line_number (digits after timestamp, before colon)
/// 5. content (everything after `: `)
static ANNOTATE_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]+)\s+(.+?)\s+(\d{4}-\d{2}-\d{2}\s\d{2}:\d{2}:\d{2})\s+(\d+):\s?(.*)$")
        .expect("Invalid annotate line regex")
});

/// Regex for one `jj diff --summary` line: `<LETTER> <path>`
static DIFF_SUMMARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]) (.+)$").expect("Invalid diff summary regex"));

/// Timestamp format printed by `jj file annotate`
const ANNOTATE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parser for jj command output
pub struct Parser;

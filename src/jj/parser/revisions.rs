//! Revision list parser (completion candidates)

use super::Parser;

impl Parser {
    /// Parse one revision (change id or bookmark name) per line
    ///
    /// Entries are trimmed; duplicates keep their first position.
    pub fn parse_revision_list(output: &str) -> Vec<String> {
        let mut revisions: Vec<String> = Vec::new();
        for line in output.lines() {
            let rev = line.trim();
            if rev.is_empty() || revisions.iter().any(|r| r == rev) {
                continue;
            }
            revisions.push(rev.to_string());
        }
        revisions
    }
}

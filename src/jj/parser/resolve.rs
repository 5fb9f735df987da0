//! Resolve list parser (jj resolve --list)

use super::Parser;
use crate::model::ConflictListing;

impl Parser {
    /// Parse `jj resolve --list` output into a conflict listing
    ///
    /// Lines are kept whole: the path and the conflict description are not
    /// reliably separable, see [`ConflictListing::contains`].
    pub fn parse_resolve_list(output: &str) -> ConflictListing {
        ConflictListing {
            lines: output
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

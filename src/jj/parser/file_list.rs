//! Tracked file list parser (jj file list)

use super::Parser;

impl Parser {
    /// Parse `jj file list` output into paths
    ///
    /// One path per line. Empty output means none of the queried paths is
    /// tracked.
    pub fn parse_file_list(output: &str) -> Vec<String> {
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

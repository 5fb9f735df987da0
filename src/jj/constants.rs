//! jj-specific constants
//!
//! Centralized definitions for jj command names, flags, and special values.

/// jj command binary name
pub const JJ_COMMAND: &str = "jj";

/// Minimum supported jj version (`jj file annotate` appeared in 0.24)
pub const MIN_JJ_VERSION: &str = "0.24.0";

/// jj subcommands
pub mod commands {
    pub const ROOT: &str = "root";
    pub const LOG: &str = "log";
    pub const DIFF: &str = "diff";
    pub const DESCRIBE: &str = "describe";
    pub const COMMIT: &str = "commit";
    pub const RESTORE: &str = "restore";
    pub const RESOLVE: &str = "resolve";
    pub const FILE: &str = "file";
    pub const FILE_LIST: &str = "list";
    pub const FILE_SHOW: &str = "show";
    pub const FILE_ANNOTATE: &str = "annotate";
    pub const FILE_TRACK: &str = "track";
    pub const FILE_UNTRACK: &str = "untrack";
    pub const BOOKMARK: &str = "bookmark";
    pub const BOOKMARK_LIST: &str = "list";
    pub const GIT: &str = "git";
    pub const GIT_INIT: &str = "init";
}

/// jj command flags
pub mod flags {
    /// Disable color output for parsing (global flag, safe for all commands)
    pub const NO_COLOR: &str = "--color=never";
    /// Force color output (used when the caller converts ANSI itself)
    pub const ALWAYS_COLOR: &str = "--color=always";
    /// Disable graph output for parsing (jj log only, NOT a global flag)
    pub const NO_GRAPH: &str = "--no-graph";
    /// Specify template
    pub const TEMPLATE: &str = "-T";
    /// Specify revision/revset
    pub const REVISION: &str = "-r";
    /// Limit the number of log entries
    pub const LIMIT: &str = "-n";
    /// Diff summary (one `<LETTER> <path>` line per file)
    pub const SUMMARY: &str = "--summary";
    /// Git-style diff output
    pub const GIT_FORMAT: &str = "--git";
    /// Diff source revision
    pub const FROM: &str = "--from";
    /// Diff target revision
    pub const TO: &str = "--to";
    /// List conflicts (jj resolve)
    pub const LIST: &str = "--list";
    /// Message for commit/describe
    pub const MESSAGE: &str = "-m";
    /// Show version
    pub const VERSION: &str = "--version";
    /// End of options; everything after is a path
    pub const END_OF_OPTIONS: &str = "--";
}

/// Special jj values
pub mod special {
    /// The working-copy revision
    pub const WORKING_COPY: &str = "@";

    /// Version output prefix (e.g., "jj 0.37.0")
    pub const VERSION_PREFIX: &str = "jj ";

    /// Ignore file edited by the ignore operation
    pub const IGNORE_FILE: &str = ".gitignore";
}

/// Error detection patterns in jj output
pub mod errors {
    /// Pattern indicating not a jj repository
    pub const NOT_A_REPO: &str = "There is no jj repo";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jj_command_name() {
        assert_eq!(JJ_COMMAND, "jj");
    }

    #[test]
    fn test_color_flag_format() {
        assert!(flags::NO_COLOR.starts_with("--color="));
        assert!(flags::ALWAYS_COLOR.starts_with("--color="));
    }
}

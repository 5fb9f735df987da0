//! jj template definitions for stable output parsing
//!
//! These templates ensure consistent, parseable output from jj commands
//! regardless of user configuration.

use serde::{Deserialize, Serialize};

/// Separator used between fields in template output (newline)
pub const FIELD_SEPARATOR: char = '\n';

/// Templates for jj commands
pub struct Templates;

impl Templates {
    /// Template for the change metadata query (`jj log -r <rev>`)
    ///
    /// Fields (one per line, in this order):
    /// 1. change_id (shortest unique prefix)
    /// 2. change_id (full)
    /// 3. commit_id (shortest unique prefix)
    /// 4. commit_id (full)
    /// 5. description (first line)
    /// 6. bookmarks (comma-separated, remote ones as `name@remote`)
    /// 7. conflict ("true" or "false")
    /// 8. divergent ("true" or "false")
    /// 9. hidden ("true" or "false")
    pub fn change_record() -> &'static str {
        concat!(
            "change_id.shortest()",
            " ++ \"\\n\" ++ ",
            "change_id",
            " ++ \"\\n\" ++ ",
            "commit_id.shortest()",
            " ++ \"\\n\" ++ ",
            "commit_id",
            " ++ \"\\n\" ++ ",
            "description.first_line()",
            " ++ \"\\n\" ++ ",
            "bookmarks.map(|b| b.name() ++ if(b.remote(), '@' ++ b.remote())).join(',')",
            " ++ \"\\n\" ++ ",
            "if(conflict, 'true', 'false')",
            " ++ \"\\n\" ++ ",
            "if(divergent, 'true', 'false')",
            " ++ \"\\n\" ++ ",
            "if(hidden, 'true', 'false')",
            " ++ \"\\n\""
        )
    }

    /// Template listing one shortest change id per line (revision completion)
    pub fn revision_list() -> &'static str {
        "change_id.shortest() ++ \"\\n\""
    }

    /// Template for `jj bookmark list` printing one bookmark name per line
    ///
    /// Tracked remote bookmarks repeat the local name; callers deduplicate.
    pub fn bookmark_names() -> &'static str {
        "name ++ \"\\n\""
    }
}

/// Template selection for `jj log` output written to a log sink
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogTemplate {
    /// Whatever the user's jj config selects (no `-T` flag)
    #[default]
    Default,
    Compact,
    Oneline,
    Detailed,
    /// Any other jj template expression, passed verbatim
    Custom(String),
}

impl LogTemplate {
    /// Template expression to pass with `-T`, if any
    pub fn expression(&self) -> Option<&str> {
        match self {
            Self::Default => None,
            Self::Compact => Some("builtin_log_compact"),
            Self::Oneline => Some("builtin_log_oneline"),
            Self::Detailed => Some("builtin_log_detailed"),
            Self::Custom(template) => Some(template),
        }
    }
}

impl From<String> for LogTemplate {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" | "default" => Self::Default,
            "compact" => Self::Compact,
            "oneline" => Self::Oneline,
            "detailed" => Self::Detailed,
            _ => Self::Custom(value),
        }
    }
}

impl From<LogTemplate> for String {
    fn from(value: LogTemplate) -> Self {
        match value {
            LogTemplate::Default => "default".to_string(),
            LogTemplate::Compact => "compact".to_string(),
            LogTemplate::Oneline => "oneline".to_string(),
            LogTemplate::Detailed => "detailed".to_string(),
            LogTemplate::Custom(template) => template,
        }
    }
}

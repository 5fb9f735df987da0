//! Change (commit) data model

/// An identifier reported both as its shortest unique prefix and in full
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdPair {
    /// Shortest prefix that is still unique in the repository
    pub short: String,

    /// Complete identifier
    pub full: String,
}

impl IdPair {
    pub fn new(short: impl Into<String>, full: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            full: full.into(),
        }
    }

    /// Split the full id into the unique prefix and the remaining suffix
    ///
    /// `prefix + suffix == full` always holds. When `short` is not actually
    /// a prefix of `full`, the prefix is empty.
    pub fn split(&self) -> (&str, &str) {
        match self.full.strip_prefix(self.short.as_str()) {
            Some(suffix) => (&self.full[..self.short.len()], suffix),
            None => ("", &self.full),
        }
    }

    /// The part of the full id after the unique prefix
    pub fn suffix(&self) -> &str {
        self.split().1
    }
}

/// Metadata of one change, from a single templated `jj log` query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangeRecord {
    /// jj change id (stable across rewrites)
    pub change_id: IdPair,

    /// Commit id (content hash)
    pub commit_id: IdPair,

    /// First line of the description
    pub description: String,

    /// Bookmarks pointing at this change, in jj's order
    pub bookmarks: Vec<String>,

    /// Change has unresolved conflicts
    pub conflict: bool,

    /// Change id has several visible commits
    pub divergent: bool,

    /// Change is hidden from default history
    pub hidden: bool,
}

impl ChangeRecord {
    /// Get a display string for the description
    pub fn display_description(&self) -> &str {
        if self.description.is_empty() {
            "(no description set)"
        } else {
            &self.description
        }
    }

    /// Is any of the status flags set?
    pub fn has_flags(&self) -> bool {
        self.conflict || self.divergent || self.hidden
    }
}

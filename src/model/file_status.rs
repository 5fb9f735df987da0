//! File status data model

use std::fmt;

/// Semantic state of one file, as reported to the host
///
/// Exactly one value per file per query. When several facts apply, the
/// classifier picks by precedence:
/// `Conflicted > Added > Edited > UpToDate > Untracked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileStatus {
    /// Not listed by `jj file list`
    Untracked,

    /// Tracked and unchanged in the working-copy change
    UpToDate,

    /// File was added in the working-copy change
    Added,

    /// File was modified in the working-copy change
    Edited,

    /// File has unresolved conflicts
    Conflicted,
}

impl FileStatus {
    /// Single-character state marker used in mode-line labels
    pub fn indicator(self) -> char {
        match self {
            Self::Untracked => '?',
            Self::UpToDate => '-',
            Self::Added => '@',
            Self::Edited => ':',
            Self::Conflicted => '!',
        }
    }

    /// Host-facing state name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Untracked => "unregistered",
            Self::UpToDate => "up-to-date",
            Self::Added => "added",
            Self::Edited => "edited",
            Self::Conflicted => "conflict",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a directory-level status query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Path relative to the queried directory
    pub path: String,

    pub status: FileStatus,
}

impl DirEntry {
    pub fn new(path: impl Into<String>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// One line of `jj diff --summary`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSummaryEntry {
    /// Status letter (`A`, `M`, `D`, `R`, `C`, ...)
    pub letter: char,

    /// Path as printed after the letter
    pub path: String,

    /// The unmodified output line
    pub raw: String,
}

impl DiffSummaryEntry {
    pub fn is_added(&self) -> bool {
        self.letter == 'A'
    }

    pub fn is_modified(&self) -> bool {
        self.letter == 'M'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_status_indicator() {
        assert_eq!(FileStatus::UpToDate.indicator(), '-');
        assert_eq!(FileStatus::Edited.indicator(), ':');
        assert_eq!(FileStatus::Added.indicator(), '@');
        assert_eq!(FileStatus::Conflicted.indicator(), '!');
        assert_eq!(FileStatus::Untracked.indicator(), '?');
    }

    #[test]
    fn test_file_status_display() {
        assert_eq!(FileStatus::UpToDate.to_string(), "up-to-date");
        assert_eq!(FileStatus::Untracked.to_string(), "unregistered");
    }

    #[test]
    fn test_diff_summary_entry_letters() {
        let added = DiffSummaryEntry {
            letter: 'A',
            path: "new.rs".to_string(),
            raw: "A new.rs".to_string(),
        };
        assert!(added.is_added());
        assert!(!added.is_modified());

        let deleted = DiffSummaryEntry {
            letter: 'D',
            path: "gone.rs".to_string(),
            raw: "D gone.rs".to_string(),
        };
        assert!(!deleted.is_added());
        assert!(!deleted.is_modified());
    }
}

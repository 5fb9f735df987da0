//! File state classification
//!
//! Combines the parsed listings of one query into a single [`FileStatus`]
//! per file.

use crate::model::{ConflictListing, DiffSummaryEntry, DirEntry, FileStatus};

/// Parsed facts gathered for one status query
#[derive(Debug, Clone, Default)]
pub struct Listings {
    /// `jj file list`, in jj's order
    pub tracked: Vec<String>,

    /// `jj diff --summary`
    pub summary: Vec<DiffSummaryEntry>,

    /// `jj resolve --list`
    pub conflicts: ConflictListing,
}

impl Listings {
    fn is_added(&self, path: &str) -> bool {
        self.summary.iter().any(|e| e.is_added() && e.path == path)
    }

    fn is_modified(&self, path: &str) -> bool {
        self.summary.iter().any(|e| e.is_modified() && e.path == path)
    }

    fn is_tracked(&self, path: &str) -> bool {
        self.tracked.iter().any(|p| p == path)
    }
}

/// Classify one path
///
/// Checked in order: conflict (prefix match), added, modified, tracked.
/// Anything else is untracked.
pub fn classify(path: &str, listings: &Listings) -> FileStatus {
    if listings.conflicts.contains(path) {
        FileStatus::Conflicted
    } else if listings.is_added(path) {
        FileStatus::Added
    } else if listings.is_modified(path) {
        FileStatus::Edited
    } else if listings.is_tracked(path) {
        FileStatus::UpToDate
    } else {
        FileStatus::Untracked
    }
}

/// Classify every tracked file, preserving `jj file list` order
pub fn classify_all(listings: &Listings) -> Vec<DirEntry> {
    listings
        .tracked
        .iter()
        .map(|path| DirEntry::new(path.clone(), classify(path, listings)))
        .collect()
}

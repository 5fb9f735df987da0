//! Data models for vc-jj
//!
//! Plain data structures for the facts parsed out of jj output: file
//! states, change metadata, annotations and conflict listings.

mod annotation;
mod change;
mod conflict;
mod file_status;

pub use annotation::AnnotationLine;
pub use change::{ChangeRecord, IdPair};
pub use conflict::ConflictListing;
pub use file_status::{DiffSummaryEntry, DirEntry, FileStatus};

//! Version-control backend layer
//!
//! Turns parsed jj output into what a generic version-control layer asks
//! for: file states, header reports, mode-line labels and log/diff text.

pub mod ansi;
mod backend;
pub mod classify;
mod format;
pub mod theme;

pub use backend::{JjBackend, VcBackend};
pub use classify::{Listings, classify, classify_all};
pub use format::{HeaderReport, LABEL_WIDTH, ModeLine};

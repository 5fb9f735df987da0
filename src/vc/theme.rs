//! Color theme definitions
//!
//! Centralized color constants for styled report and mode-line text.
//! Picked to match jj's own default color scheme.

use ratatui::style::Color;

/// Colors for the directory header report
pub mod report {
    use super::*;

    /// Header label ("Change ID", "Commit", ...)
    pub const LABEL: Color = Color::Cyan;
    /// Unique prefix of a change id
    pub const CHANGE_ID_PREFIX: Color = Color::Magenta;
    /// Unique prefix of a commit id
    pub const COMMIT_ID_PREFIX: Color = Color::Blue;
    /// Remainder of an id after the unique prefix
    pub const ID_REST: Color = Color::DarkGray;
    /// "(no description set)" placeholder
    pub const EMPTY_DESCRIPTION: Color = Color::Yellow;
    /// Bookmark names
    pub const BOOKMARK: Color = Color::Magenta;
    /// Status tags such as "(conflict)"
    pub const STATUS_TAG: Color = Color::Red;
}

/// Colors for mode-line labels, by file state
pub mod mode_line {
    use super::*;

    pub const UP_TO_DATE: Color = Color::Reset;
    pub const EDITED: Color = Color::Yellow;
    pub const ADDED: Color = Color::Green;
    pub const CONFLICTED: Color = Color::Red;
    pub const UNTRACKED: Color = Color::DarkGray;
}

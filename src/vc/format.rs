//! Metadata formatting
//!
//! Renders a [`ChangeRecord`] as the labelled header report shown above a
//! directory status listing, and as a short mode-line label.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme;
use crate::model::{ChangeRecord, FileStatus, IdPair};

/// Width every label is padded or truncated to
pub const LABEL_WIDTH: usize = 11;

/// Mode-line label prefix, before the state indicator
const MODE_LINE_BACKEND: &str = "JJ";

/// Value part of one report line
#[derive(Debug, Clone, PartialEq, Eq)]
enum HeaderValue {
    Description { text: String, placeholder: bool },
    ChangeId(IdPair),
    CommitId(IdPair),
    Bookmarks(Vec<String>),
    Tags(Vec<&'static str>),
}

impl HeaderValue {
    fn plain(&self) -> String {
        match self {
            Self::Description { text, .. } => text.clone(),
            Self::ChangeId(id) | Self::CommitId(id) => id.full.clone(),
            Self::Bookmarks(names) => names.join(", "),
            Self::Tags(tags) => tags.concat(),
        }
    }

    fn spans(&self) -> Vec<Span<'static>> {
        match self {
            Self::Description { text, placeholder } => {
                let style = if *placeholder {
                    Style::default().fg(theme::report::EMPTY_DESCRIPTION)
                } else {
                    Style::default()
                };
                vec![Span::styled(text.clone(), style)]
            }
            Self::ChangeId(id) => id_spans(id, theme::report::CHANGE_ID_PREFIX),
            Self::CommitId(id) => id_spans(id, theme::report::COMMIT_ID_PREFIX),
            Self::Bookmarks(names) => vec![Span::styled(
                names.join(", "),
                Style::default().fg(theme::report::BOOKMARK),
            )],
            Self::Tags(tags) => tags
                .iter()
                .map(|tag| {
                    Span::styled(*tag, Style::default().fg(theme::report::STATUS_TAG))
                })
                .collect(),
        }
    }
}

/// Unique prefix emphasised, remainder dimmed
fn id_spans(id: &IdPair, prefix_color: Color) -> Vec<Span<'static>> {
    let (prefix, rest) = id.split();
    vec![
        Span::styled(
            prefix.to_string(),
            Style::default()
                .fg(prefix_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(rest.to_string(), Style::default().fg(theme::report::ID_REST)),
    ]
}

fn padded_label(label: &str) -> String {
    format!("{:<width$.width$}: ", label, width = LABEL_WIDTH)
}

/// Header report for one change
///
/// Lines, in order: Description, Change ID, Commit, Bookmarks (only when
/// any), Status (only when a flag is set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderReport {
    lines: Vec<(&'static str, HeaderValue)>,
}

impl HeaderReport {
    pub fn from_record(record: &ChangeRecord) -> Self {
        let mut lines = vec![
            (
                "Description",
                HeaderValue::Description {
                    text: record.display_description().to_string(),
                    placeholder: record.description.is_empty(),
                },
            ),
            ("Change ID", HeaderValue::ChangeId(record.change_id.clone())),
            ("Commit", HeaderValue::CommitId(record.commit_id.clone())),
        ];

        if !record.bookmarks.is_empty() {
            lines.push(("Bookmarks", HeaderValue::Bookmarks(record.bookmarks.clone())));
        }

        if record.has_flags() {
            let tags = [
                (record.conflict, "(conflict)"),
                (record.divergent, "(divergent)"),
                (record.hidden, "(hidden)"),
            ]
            .into_iter()
            .filter_map(|(set, tag)| set.then_some(tag))
            .collect();
            lines.push(("Status", HeaderValue::Tags(tags)));
        }

        Self { lines }
    }

    /// Labels of the present lines, in order
    pub fn labels(&self) -> Vec<&'static str> {
        self.lines.iter().map(|(label, _)| *label).collect()
    }

    /// Plain text, lines joined by `\n`, no trailing newline
    pub fn to_plain(&self) -> String {
        self.lines
            .iter()
            .map(|(label, value)| format!("{}{}", padded_label(label), value.plain()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Styled text with the same content as [`Self::to_plain`]
    pub fn to_text(&self) -> Text<'static> {
        let lines: Vec<Line<'static>> = self
            .lines
            .iter()
            .map(|(label, value)| {
                let mut spans = vec![Span::styled(
                    padded_label(label),
                    Style::default().fg(theme::report::LABEL),
                )];
                spans.extend(value.spans());
                Line::from(spans)
            })
            .collect();
        Text::from(lines)
    }
}

/// Short working-revision label plus its tooltip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeLine {
    /// 3-char state prefix followed by the shortest change id
    pub label: String,

    /// Full change id and description first line
    pub tooltip: String,

    pub status: FileStatus,
}

impl ModeLine {
    pub fn new(status: FileStatus, record: &ChangeRecord) -> Self {
        Self {
            label: format!(
                "{}{}{}",
                MODE_LINE_BACKEND,
                status.indicator(),
                record.change_id.short
            ),
            tooltip: format!(
                "{}\n{}",
                record.change_id.full,
                record.display_description()
            ),
            status,
        }
    }

    /// Label styled by file state
    pub fn to_span(&self) -> Span<'static> {
        let color = match self.status {
            FileStatus::UpToDate => theme::mode_line::UP_TO_DATE,
            FileStatus::Edited => theme::mode_line::EDITED,
            FileStatus::Added => theme::mode_line::ADDED,
            FileStatus::Conflicted => theme::mode_line::CONFLICTED,
            FileStatus::Untracked => theme::mode_line::UNTRACKED,
        };
        Span::styled(self.label.clone(), Style::default().fg(color))
    }
}

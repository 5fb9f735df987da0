//! Snapshot tests for the header report and mode line
//!
//! Uses insta + ratatui TestBackend for visual regression testing.
//! Reference: https://ratatui.rs/recipes/testing/snapshots/

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend, text::Line, widgets::Paragraph};

use vc_jj::model::{ChangeRecord, FileStatus, IdPair};
use vc_jj::vc::{HeaderReport, ModeLine};

fn sample_record() -> ChangeRecord {
    ChangeRecord {
        change_id: IdPair::new("qp", "qpvuntsmwlqt"),
        commit_id: IdPair::new("230d", "230dd059e1b0"),
        description: "Fix parser".to_string(),
        bookmarks: vec!["main".to_string(), "feature".to_string()],
        conflict: true,
        ..Default::default()
    }
}

#[test]
fn test_header_report_plain() {
    let report = HeaderReport::from_record(&sample_record());

    assert_snapshot!(report.to_plain(), @r"
    Description: Fix parser
    Change ID  : qpvuntsmwlqt
    Commit     : 230dd059e1b0
    Bookmarks  : main, feature
    Status     : (conflict)
    ");
}

#[test]
fn test_header_report_plain_all_flags() {
    let record = ChangeRecord {
        bookmarks: vec![],
        divergent: true,
        hidden: true,
        ..sample_record()
    };

    assert_snapshot!(HeaderReport::from_record(&record).to_plain(), @r"
    Description: Fix parser
    Change ID  : qpvuntsmwlqt
    Commit     : 230dd059e1b0
    Status     : (conflict)(divergent)(hidden)
    ");
}

#[test]
fn test_header_report_rendered() {
    let report = HeaderReport::from_record(&sample_record());

    let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
    terminal
        .draw(|frame| {
            frame.render_widget(Paragraph::new(report.to_text()), frame.area());
        })
        .unwrap();

    assert_snapshot!(terminal.backend(), @r#"
    "Description: Fix parser                 "
    "Change ID  : qpvuntsmwlqt               "
    "Commit     : 230dd059e1b0               "
    "Bookmarks  : main, feature              "
    "Status     : (conflict)                 "
    "#);
}

#[test]
fn test_header_report_rendered_fresh_change() {
    let record = ChangeRecord {
        change_id: IdPair::new("z", "zzzzzzzzzzzz"),
        commit_id: IdPair::new("0", "000000000000"),
        ..Default::default()
    };
    let report = HeaderReport::from_record(&record);

    let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
    terminal
        .draw(|frame| {
            frame.render_widget(Paragraph::new(report.to_text()), frame.area());
        })
        .unwrap();

    assert_snapshot!(terminal.backend(), @r#"
    "Description: (no description set)       "
    "Change ID  : zzzzzzzzzzzz               "
    "Commit     : 000000000000               "
    "                                        "
    "#);
}

#[test]
fn test_mode_line_rendered() {
    let mode_line = ModeLine::new(FileStatus::Conflicted, &sample_record());

    let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
    terminal
        .draw(|frame| {
            frame.render_widget(
                Paragraph::new(Line::from(mode_line.to_span())),
                frame.area(),
            );
        })
        .unwrap();

    assert_snapshot!(terminal.backend(), @r#""JJ!qp                                   ""#);
    assert_snapshot!(mode_line.tooltip, @r"
    qpvuntsmwlqt
    Fix parser
    ");
}

//! Integration tests for change metadata: header report, mode line,
//! revision navigation and completion.

#[path = "common/mod.rs"]
mod common;

use common::TestRepo;
use vc_jj::model::FileStatus;
use vc_jj::vc::VcBackend;

#[test]
fn test_working_revision_record() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    repo.jj(&["describe", "-m", "Add feature\n\nLonger body"]);
    repo.jj(&["bookmark", "create", "feature", "-r", "@"]);

    let record = repo.backend().working_revision(&repo.path()).unwrap();

    assert_eq!(record.description, "Add feature");
    assert_eq!(record.bookmarks, vec!["feature"]);
    assert_eq!(record.change_id.full, repo.full_change_id("@"));
    assert!(record.change_id.full.starts_with(&record.change_id.short));
    assert!(record.commit_id.full.starts_with(&record.commit_id.short));
    assert!(!record.conflict);
    assert!(!record.divergent);
    assert!(!record.hidden);
}

#[test]
fn test_dir_extra_headers() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    repo.jj(&["describe", "-m", "Add feature"]);
    repo.jj(&["bookmark", "create", "feature", "-r", "@"]);

    let report = repo.backend().dir_extra_headers(&repo.path()).unwrap();
    let plain = report.to_plain();

    assert_eq!(
        report.labels(),
        vec!["Description", "Change ID", "Commit", "Bookmarks"]
    );
    assert!(plain.starts_with("Description: Add feature\n"));
    assert!(plain.contains(&format!("Change ID  : {}", repo.full_change_id("@"))));
    assert!(plain.ends_with("Bookmarks  : feature"));
}

#[test]
fn test_dir_extra_headers_fresh_change() {
    skip_if_no_jj!();
    let repo = TestRepo::new();

    let report = repo.backend().dir_extra_headers(&repo.path()).unwrap();

    assert_eq!(report.labels(), vec!["Description", "Change ID", "Commit"]);
    assert!(report.to_plain().starts_with("Description: (no description set)"));
}

#[test]
fn test_mode_line_string() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    repo.write_file("a.txt", "one");
    repo.jj(&["describe", "-m", "Start a"]);

    let backend = repo.backend();
    let record = backend.working_revision(&repo.path()).unwrap();
    let mode_line = backend.mode_line_string(&repo.path(), "a.txt").unwrap();

    assert_eq!(mode_line.status, FileStatus::Added);
    assert_eq!(mode_line.label, format!("JJ@{}", record.change_id.short));
    assert_eq!(
        mode_line.tooltip,
        format!("{}\nStart a", record.change_id.full)
    );
}

#[test]
fn test_previous_and_next_revision() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    repo.write_file("a.txt", "one");
    repo.commit("First");

    let backend = repo.backend();
    let previous = backend
        .previous_revision(&repo.path(), "@")
        .unwrap()
        .expect("working copy has a parent");
    let parent = backend.change_record(&repo.path(), &previous).unwrap();
    assert_eq!(parent.description, "First");

    let next = backend
        .next_revision(&repo.path(), &previous)
        .unwrap()
        .expect("parent has a child");
    let current = backend.working_revision(&repo.path()).unwrap();
    assert_eq!(next, current.change_id.short);
}

#[test]
fn test_previous_of_root_is_none() {
    skip_if_no_jj!();
    let repo = TestRepo::new();

    let previous = repo.backend().previous_revision(&repo.path(), "root()").unwrap();
    assert!(previous.is_none());
}

#[test]
fn test_revision_completion_table() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    repo.write_file("a.txt", "one");
    repo.jj(&["bookmark", "create", "topic", "-r", "@"]);

    let backend = repo.backend();
    let revisions = backend.revision_completion_table(&repo.path(), &[]).unwrap();
    let current = backend.working_revision(&repo.path()).unwrap();

    assert!(revisions.contains(&current.change_id.short));
    assert!(revisions.contains(&"topic".to_string()));
    assert_eq!(
        revisions.iter().filter(|r| *r == "topic").count(),
        1,
        "bookmark names are listed once"
    );
}

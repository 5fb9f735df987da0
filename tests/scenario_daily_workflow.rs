//! Story: Daily Development Workflow through the backend
//!
//! 1. Create a repository
//! 2. Write code and check its state
//! 3. Describe and commit the work
//! 4. Revert an unwanted edit
//! 5. Ignore build output and stop tracking it

#[path = "common/mod.rs"]
mod common;

use common::TestRepo;
use tempfile::TempDir;
use vc_jj::config::VcConfig;
use vc_jj::model::FileStatus;
use vc_jj::vc::{JjBackend, VcBackend};

#[test]
fn story_create_repository() {
    skip_if_no_jj!();
    let dir = TempDir::new().unwrap();
    let backend = JjBackend::probe(VcConfig::default()).expect("jj should be usable");

    assert!(backend.root(dir.path()).unwrap().is_none());
    backend.create_repo(dir.path()).expect("init should succeed");

    let root = backend.root(dir.path()).unwrap().expect("repository exists");
    assert_eq!(
        std::fs::canonicalize(root).unwrap(),
        std::fs::canonicalize(dir.path()).unwrap()
    );
}

#[test]
fn story_describe_and_commit() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    let backend = repo.backend();
    let dir = repo.path();

    repo.write_file("feature.rs", "fn feature() {}\n");
    assert_eq!(backend.state(&dir, "feature.rs").unwrap(), FileStatus::Added);

    backend.describe(&dir, "@", "WIP feature").unwrap();
    assert_eq!(repo.get_description("@"), "WIP feature");

    backend
        .checkin(&dir, &[], "Add feature")
        .expect("commit should succeed");

    assert_eq!(repo.get_description("@-"), "Add feature");
    assert_eq!(
        backend.state(&dir, "feature.rs").unwrap(),
        FileStatus::UpToDate
    );
    assert_eq!(backend.working_revision(&dir).unwrap().description, "");
}

#[test]
fn story_commit_selected_files() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    let backend = repo.backend();
    let dir = repo.path();

    repo.write_file("keep.rs", "// later\n");
    repo.write_file("ship.rs", "// now\n");

    backend.checkin(&dir, &["ship.rs"], "Ship it").unwrap();

    assert_eq!(backend.state(&dir, "ship.rs").unwrap(), FileStatus::UpToDate);
    assert_eq!(backend.state(&dir, "keep.rs").unwrap(), FileStatus::Added);
}

#[test]
fn story_revert_unwanted_edit() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    let backend = repo.backend();
    let dir = repo.path();

    repo.write_file("main.rs", "fn main() {}\n");
    repo.commit("Add main");
    repo.write_file("main.rs", "fn main() { panic!() }\n");
    assert_eq!(backend.state(&dir, "main.rs").unwrap(), FileStatus::Edited);

    backend.revert(&dir, "main.rs").unwrap();

    assert_eq!(repo.read_file("main.rs"), "fn main() {}\n");
    assert_eq!(backend.state(&dir, "main.rs").unwrap(), FileStatus::UpToDate);
}

#[test]
fn story_ignore_build_output() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    let backend = repo.backend();
    let dir = repo.path();

    let ignore_file = backend.ignore(&dir, "build.log", false).unwrap();
    assert_eq!(ignore_file.file_name().unwrap(), ".gitignore");
    assert!(repo.read_file(".gitignore").contains("/build.log"));

    repo.write_file("build.log", "noise\n");
    assert_eq!(backend.state(&dir, "build.log").unwrap(), FileStatus::Untracked);

    backend.ignore(&dir, "build.log", true).unwrap();
    assert!(!repo.read_file(".gitignore").contains("/build.log"));
}

#[test]
fn story_untrack_then_track_again() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    let backend = repo.backend();
    let dir = repo.path();

    repo.write_file("out/cache.bin", "data\n");
    assert!(backend.registered(&dir, "out/cache.bin").unwrap());

    // jj only untracks files that are ignored
    repo.write_file(".gitignore", "/out/\n");
    backend.unregister(&dir, "out/cache.bin").unwrap();
    assert_eq!(
        backend.state(&dir, "out/cache.bin").unwrap(),
        FileStatus::Untracked
    );

    std::fs::remove_file(dir.join(".gitignore")).unwrap();
    backend.register(&dir, &["out/cache.bin"]).unwrap();
    assert!(backend.registered(&dir, "out/cache.bin").unwrap());
}

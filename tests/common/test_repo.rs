//! TestRepo helper for integration tests.
//!
//! Provides a temporary jj repository for testing backend operations.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

use vc_jj::config::VcConfig;
use vc_jj::jj::JjExecutor;
use vc_jj::vc::JjBackend;

/// A temporary jj repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new jj repository in a temporary directory.
    ///
    /// A user identity is configured for the repository and a fresh
    /// working-copy change is started, so every change made by the test has
    /// a known author.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");

        let output = Command::new("jj")
            .args(["git", "init"])
            .current_dir(dir.path())
            .output()
            .expect("Failed to execute jj git init");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("jj git init failed: {}", stderr);
        }

        let repo = Self { dir };
        repo.jj(&["config", "set", "--repo", "user.name", "Test User"]);
        repo.jj(&["config", "set", "--repo", "user.email", "test@example.com"]);
        repo.jj(&["new"]);
        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Backend with default configuration.
    pub fn backend(&self) -> JjBackend {
        self.backend_with(VcConfig::default())
    }

    /// Backend with the given configuration.
    pub fn backend_with(&self, config: VcConfig) -> JjBackend {
        JjBackend::new(JjExecutor::new(), config)
    }

    /// Execute a jj command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn jj(&self, args: &[&str]) -> String {
        let output = Command::new("jj")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to execute jj command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "jj {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Read a file from the repository.
    ///
    /// Returns an empty string if the file does not exist.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).unwrap_or_default()
    }

    /// Get the current change ID (short form, 8 characters).
    pub fn current_change_id(&self) -> String {
        self.jj(&["log", "-r", "@", "--no-graph", "-T", "change_id.short(8)"])
            .trim()
            .to_string()
    }

    /// Get the full change ID of a revision.
    pub fn full_change_id(&self, rev: &str) -> String {
        self.jj(&["log", "-r", rev, "--no-graph", "-T", "change_id"])
            .trim()
            .to_string()
    }

    /// Get the description of a revision.
    pub fn get_description(&self, rev: &str) -> String {
        self.jj(&["log", "-r", rev, "--no-graph", "-T", "description"])
            .trim()
            .to_string()
    }

    /// Commit the working copy with a message and start a new change.
    pub fn commit(&self, message: &str) {
        self.jj(&["commit", "-m", message]);
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

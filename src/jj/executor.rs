//! jj command executor
//!
//! Handles running jj commands and capturing their output. Every call takes
//! the directory to run in explicitly; the process-wide current directory is
//! never consulted.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::JjError;
use super::constants::{self, errors, flags, special};

/// Raw result of one jj invocation
///
/// A non-zero exit is not an error at this level; callers decide whether
/// the exit code is a benign signal or a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Process exit code (-1 when terminated by a signal)
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Convert into stdout, mapping a non-zero exit to an error
    pub fn into_stdout(self) -> Result<String, JjError> {
        if self.success() {
            return Ok(self.stdout);
        }

        // Check for common error patterns
        if self.stderr.contains(errors::NOT_A_REPO) {
            return Err(JjError::NotARepository);
        }

        Err(JjError::CommandFailed {
            stderr: self.stderr,
            exit_code: self.exit_code,
        })
    }
}

/// Executor for jj commands
#[derive(Debug, Clone)]
pub struct JjExecutor {
    /// jj executable (name looked up on PATH, or an absolute path)
    program: PathBuf,
}

impl Default for JjExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl JjExecutor {
    /// Create a new executor using `jj` from PATH
    pub fn new() -> Self {
        Self::with_program(constants::JJ_COMMAND)
    }

    /// Create a new executor for a specific jj executable
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Probe for a usable jj executable
    ///
    /// Returns `None` when the executable cannot be launched or its version
    /// is below [`constants::MIN_JJ_VERSION`]. Every backend operation
    /// depends on this handle, so absence means the backend does not apply.
    pub fn probe(program: impl Into<PathBuf>) -> Option<Self> {
        let executor = Self::with_program(program);
        match executor.check_version() {
            Ok(()) => Some(executor),
            Err(e) => {
                tracing::debug!(program = ?executor.program, error = %e, "jj unavailable");
                None
            }
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run a jj command in `dir` and capture its output
    ///
    /// Adds `--color=never` (or `--color=always` when `color` is set).
    /// Only launch failures are errors.
    pub fn invoke(&self, dir: &Path, args: &[&str], color: bool) -> Result<CommandOutput, JjError> {
        let mut cmd = Command::new(&self.program);
        cmd.current_dir(dir);
        cmd.arg(if color {
            flags::ALWAYS_COLOR
        } else {
            flags::NO_COLOR
        });
        cmd.args(args);

        tracing::debug!(?dir, ?args, "running jj");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JjError::JjNotFound
            } else {
                JjError::IoError(e)
            }
        })?;

        let exit_code = output.status.code().unwrap_or(-1);
        tracing::debug!(exit_code, stdout_len = output.stdout.len(), "jj finished");

        Ok(CommandOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Run a jj command in `dir`; a non-zero exit is an error
    pub fn run(&self, dir: &Path, args: &[&str]) -> Result<String, JjError> {
        self.invoke(dir, args, false)?.into_stdout()
    }

    /// Run a jj command in `dir` and write its stdout into `sink`
    ///
    /// Nothing is written when the command fails. Returns the number of
    /// bytes written.
    pub fn run_into(
        &self,
        dir: &Path,
        args: &[&str],
        color: bool,
        sink: &mut dyn Write,
    ) -> Result<usize, JjError> {
        let stdout = self.invoke(dir, args, color)?.into_stdout()?;
        sink.write_all(stdout.as_bytes())?;
        Ok(stdout.len())
    }

    /// Get the jj version
    pub fn version(&self) -> Result<String, JjError> {
        let output = Command::new(&self.program)
            .arg(flags::VERSION)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    JjError::JjNotFound
                } else {
                    JjError::IoError(e)
                }
            })?;
        if !output.status.success() {
            return Err(JjError::CommandFailed {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit_code: output.status.code().unwrap_or(-1),
            });
        }
        // Output format: "jj 0.37.0"
        let stdout = String::from_utf8_lossy(&output.stdout);
        let trimmed = stdout.trim();
        Ok(trimmed
            .strip_prefix(special::VERSION_PREFIX)
            .unwrap_or(trimmed)
            .to_string())
    }

    /// Check if jj version is supported
    pub fn check_version(&self) -> Result<(), JjError> {
        let version = self.version()?;
        if !is_version_supported(&version, constants::MIN_JJ_VERSION) {
            return Err(JjError::UnsupportedVersion {
                version,
                minimum: constants::MIN_JJ_VERSION.to_string(),
            });
        }
        Ok(())
    }
}

/// Compare version strings (simple semver comparison)
///
/// Handles prerelease suffixes like "0.37.0-rc1" by stripping the suffix.
/// Build metadata after a space ("0.37.0 (abc123)") is ignored.
fn is_version_supported(version: &str, minimum: &str) -> bool {
    let parse_version = |v: &str| -> Option<(u32, u32, u32)> {
        let v = v.split_whitespace().next()?;
        let parts: Vec<&str> = v.split('.').collect();
        if parts.len() >= 2 {
            let major = parts[0].parse().ok()?;
            let minor = parts[1].parse().ok()?;
            // Strip prerelease suffix (e.g., "0-rc1" -> "0")
            let patch = parts
                .get(2)
                .and_then(|p| p.split(['-', '+']).next().and_then(|n| n.parse().ok()))
                .unwrap_or(0);
            Some((major, minor, patch))
        } else {
            None
        }
    };

    match (parse_version(version), parse_version(minimum)) {
        (Some(v), Some(m)) => v >= m,
        _ => false,
    }
}

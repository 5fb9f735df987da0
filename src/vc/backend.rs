//! Backend contract
//!
//! [`VcBackend`] is the callback surface a generic version-control layer
//! drives; [`JjBackend`] implements it by running jj. Every method takes
//! the directory to run in, and file arguments are relative to it.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use ratatui::text::Text;

use super::ansi;
use super::classify::{self, Listings};
use super::format::{HeaderReport, ModeLine};
use crate::config::VcConfig;
use crate::jj::constants::{commands, flags, special};
use crate::jj::parser::Parser;
use crate::jj::{JjError, JjExecutor, Templates};
use crate::model::{ChangeRecord, ConflictListing, DirEntry, FileStatus};

/// Operations a version-control layer needs from a backend
pub trait VcBackend {
    /// Repository root containing `dir`, or `None` outside a repository
    fn root(&self, dir: &Path) -> Result<Option<PathBuf>, JjError>;

    /// Is `file` tracked?
    fn registered(&self, dir: &Path, file: &str) -> Result<bool, JjError>;

    /// Classify one file
    fn state(&self, dir: &Path, file: &str) -> Result<FileStatus, JjError>;

    /// Classify every tracked file under `files` (all of `dir` when empty)
    ///
    /// Results are handed to `update` in tracked-file order. On failure
    /// `update` is not called.
    fn dir_status_files(
        &self,
        dir: &Path,
        files: &[&str],
        update: &mut dyn FnMut(Vec<DirEntry>),
    ) -> Result<(), JjError>;

    /// Header report for the working-copy change
    fn dir_extra_headers(&self, dir: &Path) -> Result<HeaderReport, JjError>;

    /// Metadata of the working-copy change
    fn working_revision(&self, dir: &Path) -> Result<ChangeRecord, JjError>;

    /// Mode-line label for `file`
    fn mode_line_string(&self, dir: &Path, file: &str) -> Result<ModeLine, JjError>;

    /// Write the log of `files` into `sink`
    fn print_log(
        &self,
        dir: &Path,
        files: &[&str],
        sink: &mut dyn Write,
        limit: Option<usize>,
        start_revision: Option<&str>,
    ) -> Result<(), JjError>;

    /// Write the diff of `files` between two revisions into `sink`
    ///
    /// With no revisions the working-copy change is diffed against its
    /// parent. Returns whether any difference was written.
    fn diff(
        &self,
        dir: &Path,
        files: &[&str],
        rev1: Option<&str>,
        rev2: Option<&str>,
        sink: &mut dyn Write,
    ) -> Result<bool, JjError>;

    /// Write annotate output for `file` into `sink`
    fn annotate_command(
        &self,
        dir: &Path,
        file: &str,
        sink: &mut dyn Write,
        revision: Option<&str>,
    ) -> Result<(), JjError>;

    /// Timestamp of one annotate output line
    fn annotate_time(&self, line: &str) -> Option<DateTime<Local>>;

    /// Change id of one annotate output line
    fn annotate_extract_revision_at_line(&self, line: &str) -> Option<String>;

    /// Revision names offered for completion: change ids, then bookmarks
    fn revision_completion_table(&self, dir: &Path, files: &[&str])
    -> Result<Vec<String>, JjError>;

    /// First parent of `rev`
    fn previous_revision(&self, dir: &Path, rev: &str) -> Result<Option<String>, JjError>;

    /// First child of `rev`
    fn next_revision(&self, dir: &Path, rev: &str) -> Result<Option<String>, JjError>;

    /// Write the content of `file` at `rev` into `sink`
    fn find_revision(
        &self,
        dir: &Path,
        file: &str,
        rev: &str,
        sink: &mut dyn Write,
    ) -> Result<(), JjError>;

    /// Commit `files` (everything when empty) with `comment`
    fn checkin(&self, dir: &Path, files: &[&str], comment: &str) -> Result<(), JjError>;

    /// Replace the description of `rev`
    fn describe(&self, dir: &Path, rev: &str, message: &str) -> Result<(), JjError>;

    /// Discard working-copy changes to `file`
    fn revert(&self, dir: &Path, file: &str) -> Result<(), JjError>;

    /// Start tracking `files`
    fn register(&self, dir: &Path, files: &[&str]) -> Result<(), JjError>;

    /// Stop tracking `file`
    fn unregister(&self, dir: &Path, file: &str) -> Result<(), JjError>;

    /// Add `file` to (or remove it from) the repository ignore file
    ///
    /// Returns the path of the edited ignore file.
    fn ignore(&self, dir: &Path, file: &str, remove: bool) -> Result<PathBuf, JjError>;

    /// Create a new repository in `dir`
    fn create_repo(&self, dir: &Path) -> Result<(), JjError>;
}

/// [`VcBackend`] implemented with the jj command-line tool
#[derive(Debug, Clone)]
pub struct JjBackend {
    executor: JjExecutor,
    config: VcConfig,
}

impl JjBackend {
    pub fn new(executor: JjExecutor, config: VcConfig) -> Self {
        Self { executor, config }
    }

    /// Backend for the configured jj, or `None` if it is unusable
    pub fn probe(config: VcConfig) -> Option<Self> {
        let executor = JjExecutor::probe(config.program.clone())?;
        Some(Self::new(executor, config))
    }

    pub fn config(&self) -> &VcConfig {
        &self.config
    }

    /// Metadata of `rev`
    pub fn change_record(&self, dir: &Path, rev: &str) -> Result<ChangeRecord, JjError> {
        let output = self.executor.run(
            dir,
            &[
                commands::LOG,
                flags::NO_GRAPH,
                flags::REVISION,
                rev,
                flags::TEMPLATE,
                Templates::change_record(),
            ],
        )?;
        Parser::parse_change_record(&output)
    }

    /// Log of `files` as text, styled when colorizing is enabled
    pub fn log_text(
        &self,
        dir: &Path,
        files: &[&str],
        limit: Option<usize>,
        start_revision: Option<&str>,
    ) -> Result<Text<'static>, JjError> {
        let mut buf = Vec::new();
        self.print_log(dir, files, &mut buf, limit, start_revision)?;
        Ok(self.output_text(&buf))
    }

    /// Diff as text, styled when colorizing is enabled
    pub fn diff_text(
        &self,
        dir: &Path,
        files: &[&str],
        rev1: Option<&str>,
        rev2: Option<&str>,
    ) -> Result<Text<'static>, JjError> {
        let mut buf = Vec::new();
        self.diff(dir, files, rev1, rev2, &mut buf)?;
        Ok(self.output_text(&buf))
    }

    fn output_text(&self, buf: &[u8]) -> Text<'static> {
        let output = String::from_utf8_lossy(buf);
        if self.config.colorize {
            ansi::to_text(&output)
        } else {
            Text::raw(output.into_owned())
        }
    }

    /// Gather the three listings for `paths`
    fn listings(&self, dir: &Path, paths: &[&str]) -> Result<Listings, JjError> {
        let tracked = self
            .executor
            .run(dir, &with_paths(&[commands::FILE, commands::FILE_LIST], paths))?;
        let tracked = Parser::parse_file_list(&tracked);

        if tracked.is_empty() {
            return Ok(Listings::default());
        }

        let summary = self
            .executor
            .run(dir, &with_paths(&[commands::DIFF, flags::SUMMARY], paths))?;
        let summary = Parser::parse_diff_summary(&summary);

        Ok(Listings {
            tracked,
            summary,
            conflicts: self.conflicts(dir, paths)?,
        })
    }

    /// `jj resolve --list`, where a non-zero exit means "no conflicts"
    fn conflicts(&self, dir: &Path, paths: &[&str]) -> Result<ConflictListing, JjError> {
        let output = self.executor.invoke(
            dir,
            &with_paths(&[commands::RESOLVE, flags::LIST], paths),
            false,
        )?;

        if output.success() {
            Ok(Parser::parse_resolve_list(&output.stdout))
        } else {
            tracing::debug!(
                exit_code = output.exit_code,
                stderr = %output.stderr.trim(),
                "resolve --list failed; treating as no conflicts"
            );
            Ok(ConflictListing::empty())
        }
    }

    /// First revision of a revset, if any
    fn first_revision(&self, dir: &Path, revset: &str) -> Result<Option<String>, JjError> {
        let output = self.executor.run(
            dir,
            &[
                commands::LOG,
                flags::NO_GRAPH,
                flags::REVISION,
                revset,
                flags::TEMPLATE,
                Templates::revision_list(),
            ],
        )?;
        Ok(Parser::parse_revision_list(&output).into_iter().next())
    }
}

impl VcBackend for JjBackend {
    fn root(&self, dir: &Path) -> Result<Option<PathBuf>, JjError> {
        match self.executor.run(dir, &[commands::ROOT]) {
            Ok(output) => Ok(Some(PathBuf::from(output.trim_end_matches(['\r', '\n'])))),
            Err(JjError::NotARepository) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn registered(&self, dir: &Path, file: &str) -> Result<bool, JjError> {
        let file = normalize(file);
        let output = self
            .executor
            .run(dir, &with_paths(&[commands::FILE, commands::FILE_LIST], &[file]))?;
        Ok(!Parser::parse_file_list(&output).is_empty())
    }

    fn state(&self, dir: &Path, file: &str) -> Result<FileStatus, JjError> {
        let file = normalize(file);
        let listings = self.listings(dir, &[file])?;
        let status = classify::classify(file, &listings);
        tracing::debug!(file, %status, "classified");
        Ok(status)
    }

    fn dir_status_files(
        &self,
        dir: &Path,
        files: &[&str],
        update: &mut dyn FnMut(Vec<DirEntry>),
    ) -> Result<(), JjError> {
        let files: Vec<&str> = files.iter().map(|f| normalize(f)).collect();
        let paths: &[&str] = if files.is_empty() { &["."] } else { &files };
        let listings = self.listings(dir, paths)?;
        update(classify::classify_all(&listings));
        Ok(())
    }

    fn dir_extra_headers(&self, dir: &Path) -> Result<HeaderReport, JjError> {
        let record = self.working_revision(dir)?;
        Ok(HeaderReport::from_record(&record))
    }

    fn working_revision(&self, dir: &Path) -> Result<ChangeRecord, JjError> {
        self.change_record(dir, special::WORKING_COPY)
    }

    fn mode_line_string(&self, dir: &Path, file: &str) -> Result<ModeLine, JjError> {
        let status = self.state(dir, file)?;
        let record = self.working_revision(dir)?;
        Ok(ModeLine::new(status, &record))
    }

    fn print_log(
        &self,
        dir: &Path,
        files: &[&str],
        sink: &mut dyn Write,
        limit: Option<usize>,
        start_revision: Option<&str>,
    ) -> Result<(), JjError> {
        let mut args: Vec<String> = vec![commands::LOG.to_string()];

        if let Some(template) = self.config.log_template.expression() {
            args.extend([flags::TEMPLATE.to_string(), template.to_string()]);
        }
        if let Some(limit) = limit.or(self.config.log_limit) {
            args.extend([flags::LIMIT.to_string(), limit.to_string()]);
        }
        if let Some(rev) = start_revision {
            args.extend([flags::REVISION.to_string(), format!("::{rev}")]);
        }
        push_paths(&mut args, files);

        self.executor
            .run_into(dir, &as_strs(&args), self.config.colorize, sink)?;
        Ok(())
    }

    fn diff(
        &self,
        dir: &Path,
        files: &[&str],
        rev1: Option<&str>,
        rev2: Option<&str>,
        sink: &mut dyn Write,
    ) -> Result<bool, JjError> {
        let mut args: Vec<String> = vec![commands::DIFF.to_string(), flags::GIT_FORMAT.to_string()];
        args.extend(self.config.diff_switches.iter().cloned());

        if let Some(rev) = rev1 {
            args.extend([flags::FROM.to_string(), rev.to_string()]);
        }
        if let Some(rev) = rev2 {
            args.extend([flags::TO.to_string(), rev.to_string()]);
        }
        push_paths(&mut args, files);

        let written = self
            .executor
            .run_into(dir, &as_strs(&args), self.config.colorize, sink)?;
        Ok(written > 0)
    }

    fn annotate_command(
        &self,
        dir: &Path,
        file: &str,
        sink: &mut dyn Write,
        revision: Option<&str>,
    ) -> Result<(), JjError> {
        let mut args: Vec<String> = vec![
            commands::FILE.to_string(),
            commands::FILE_ANNOTATE.to_string(),
        ];
        args.extend(self.config.annotate_switches.iter().cloned());
        if let Some(rev) = revision {
            args.extend([flags::REVISION.to_string(), rev.to_string()]);
        }
        push_paths(&mut args, &[normalize(file)]);

        self.executor.run_into(dir, &as_strs(&args), false, sink)?;
        Ok(())
    }

    fn annotate_time(&self, line: &str) -> Option<DateTime<Local>> {
        Parser::parse_annotate_line(line)?.timestamp
    }

    fn annotate_extract_revision_at_line(&self, line: &str) -> Option<String> {
        Parser::parse_annotate_line(line).map(|annotation| annotation.change_id)
    }

    fn revision_completion_table(
        &self,
        dir: &Path,
        files: &[&str],
    ) -> Result<Vec<String>, JjError> {
        let mut output = self.executor.run(
            dir,
            &with_paths(
                &[
                    commands::LOG,
                    flags::NO_GRAPH,
                    flags::TEMPLATE,
                    Templates::revision_list(),
                ],
                files,
            ),
        )?;
        output.push_str(&self.executor.run(
            dir,
            &[
                commands::BOOKMARK,
                commands::BOOKMARK_LIST,
                flags::TEMPLATE,
                Templates::bookmark_names(),
            ],
        )?);
        Ok(Parser::parse_revision_list(&output))
    }

    fn previous_revision(&self, dir: &Path, rev: &str) -> Result<Option<String>, JjError> {
        self.first_revision(dir, &format!("({rev})-"))
    }

    fn next_revision(&self, dir: &Path, rev: &str) -> Result<Option<String>, JjError> {
        self.first_revision(dir, &format!("({rev})+"))
    }

    fn find_revision(
        &self,
        dir: &Path,
        file: &str,
        rev: &str,
        sink: &mut dyn Write,
    ) -> Result<(), JjError> {
        self.executor.run_into(
            dir,
            &with_paths(
                &[commands::FILE, commands::FILE_SHOW, flags::REVISION, rev],
                &[normalize(file)],
            ),
            false,
            sink,
        )?;
        Ok(())
    }

    fn checkin(&self, dir: &Path, files: &[&str], comment: &str) -> Result<(), JjError> {
        self.executor.run(
            dir,
            &with_paths(&[commands::COMMIT, flags::MESSAGE, comment], files),
        )?;
        Ok(())
    }

    fn describe(&self, dir: &Path, rev: &str, message: &str) -> Result<(), JjError> {
        self.executor
            .run(dir, &[commands::DESCRIBE, rev, flags::MESSAGE, message])?;
        Ok(())
    }

    fn revert(&self, dir: &Path, file: &str) -> Result<(), JjError> {
        self.executor
            .run(dir, &with_paths(&[commands::RESTORE], &[normalize(file)]))?;
        Ok(())
    }

    fn register(&self, dir: &Path, files: &[&str]) -> Result<(), JjError> {
        if files.is_empty() {
            return Ok(());
        }
        self.executor
            .run(dir, &with_paths(&[commands::FILE, commands::FILE_TRACK], files))?;
        Ok(())
    }

    fn unregister(&self, dir: &Path, file: &str) -> Result<(), JjError> {
        self.executor.run(
            dir,
            &with_paths(&[commands::FILE, commands::FILE_UNTRACK], &[normalize(file)]),
        )?;
        Ok(())
    }

    fn ignore(&self, dir: &Path, file: &str, remove: bool) -> Result<PathBuf, JjError> {
        let root = self.root(dir)?.ok_or(JjError::NotARepository)?;
        let pattern = ignore_pattern(&root, dir, file)?;
        let ignore_file = root.join(special::IGNORE_FILE);

        let existing = match fs::read_to_string(&ignore_file) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let updated = edit_ignore(&existing, &pattern, remove);
        if updated != existing {
            fs::write(&ignore_file, updated)?;
            tracing::debug!(?ignore_file, pattern, remove, "updated ignore file");
        }
        Ok(ignore_file)
    }

    fn create_repo(&self, dir: &Path) -> Result<(), JjError> {
        self.executor
            .run(dir, &[commands::GIT, commands::GIT_INIT])?;
        Ok(())
    }
}

/// `base` followed by `--` and `paths` (nothing appended when empty)
fn with_paths<'a>(base: &[&'a str], paths: &[&'a str]) -> Vec<&'a str> {
    let mut args = base.to_vec();
    if !paths.is_empty() {
        args.push(flags::END_OF_OPTIONS);
        args.extend_from_slice(paths);
    }
    args
}

fn push_paths(args: &mut Vec<String>, paths: &[&str]) {
    if !paths.is_empty() {
        args.push(flags::END_OF_OPTIONS.to_string());
        args.extend(paths.iter().map(|p| p.to_string()));
    }
}

fn as_strs(args: &[String]) -> Vec<&str> {
    args.iter().map(String::as_str).collect()
}

/// Strip a leading `./`, which jj never prints back
fn normalize(file: &str) -> &str {
    file.strip_prefix("./").unwrap_or(file)
}

/// Root-anchored ignore pattern (`/sub/file`) for `file` under `dir`
fn ignore_pattern(root: &Path, dir: &Path, file: &str) -> Result<String, JjError> {
    let absolute = fs::canonicalize(dir)?.join(normalize(file));
    let root = fs::canonicalize(root)?;
    let relative = absolute.strip_prefix(&root).map_err(|_| {
        JjError::ParseError(format!(
            "{} is outside repository {}",
            absolute.display(),
            root.display()
        ))
    })?;

    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(format!("/{}", parts.join("/")))
}

/// Add or remove one pattern line, keeping everything else as is
fn edit_ignore(existing: &str, pattern: &str, remove: bool) -> String {
    let present = existing.lines().any(|line| line.trim_end() == pattern);

    if remove {
        if !present {
            return existing.to_string();
        }
        let mut kept: String = existing
            .lines()
            .filter(|line| line.trim_end() != pattern)
            .map(|line| format!("{line}\n"))
            .collect();
        if !existing.ends_with('\n') && kept.ends_with('\n') {
            kept.pop();
        }
        kept
    } else if present {
        existing.to_string()
    } else {
        let mut updated = existing.to_string();
        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(pattern);
        updated.push('\n');
        updated
    }
}

//! vc-jj - Jujutsu backend for editor version-control layers
//!
//! Binary entry point: exposes each backend operation as a subcommand so
//! hosts without a Rust binding can drive it through a subprocess.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use ratatui::text::Text;

use vc_jj::config::VcConfig;
use vc_jj::jj::LogTemplate;
use vc_jj::model::AnnotationLine;
use vc_jj::terminal;
use vc_jj::vc::{JjBackend, VcBackend};

/// Author column width of `annotate --compact`
const ANNOTATE_AUTHOR_WIDTH: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "vc-jj", about = "Jujutsu backend for editor VC layers", version)]
struct Args {
    /// Directory to run in (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    dir: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Colorize log, diff and report output
    #[arg(long, global = true)]
    color: bool,

    /// Log template: default, compact, oneline, detailed or a jj template
    #[arg(long, global = true)]
    template: Option<String>,

    /// Extra flag forwarded to `jj diff` (repeatable)
    #[arg(long = "diff-switch", global = true, allow_hyphen_values = true)]
    diff_switches: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the repository root
    Root,
    /// Print the state of one file
    State { file: String },
    /// Print the state of every tracked file
    Status { files: Vec<String> },
    /// Print the working-copy header report
    Headers,
    /// Print the mode-line label and tooltip for a file
    ModeLine { file: String },
    /// Print the log
    Log {
        files: Vec<String>,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        #[arg(short, long)]
        revision: Option<String>,
    },
    /// Print a diff
    Diff {
        files: Vec<String>,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Print annotate output for a file
    Annotate {
        file: String,
        #[arg(short, long)]
        revision: Option<String>,
        /// Short author and date columns instead of jj's raw output
        #[arg(long)]
        compact: bool,
    },
    /// Print a file at a revision
    Show {
        file: String,
        #[arg(short, long, default_value = "@")]
        revision: String,
    },
    /// List revision names for completion
    Revisions { files: Vec<String> },
    /// Print the parent of a revision
    Prev { revision: String },
    /// Print the child of a revision
    Next { revision: String },
    /// Commit the working copy
    Commit {
        #[arg(short, long)]
        message: String,
        files: Vec<String>,
    },
    /// Set a revision's description
    Describe {
        #[arg(short, long)]
        message: String,
        #[arg(default_value = "@")]
        revision: String,
    },
    /// Discard working-copy changes to a file
    Restore { file: String },
    /// Start tracking files
    Track { files: Vec<String> },
    /// Stop tracking a file
    Untrack { file: String },
    /// Add a file to (or remove it from) .gitignore
    Ignore {
        file: String,
        #[arg(long)]
        remove: bool,
    },
    /// Create a repository
    Init,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    vc_jj::logging::init(args.verbose).map_err(|e| eyre!(e))?;

    let config = load_config(&args)?;
    let colorize = config.colorize;
    let backend = JjBackend::probe(config).ok_or_else(|| eyre!("jj is not available"))?;

    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    run(&backend, &dir, args.command, colorize)
}

/// Configuration file first, then command-line overrides
fn load_config(args: &Args) -> Result<VcConfig> {
    let mut config = match &args.config {
        Some(path) => VcConfig::load(path)?,
        None => VcConfig::default(),
    };
    if args.color {
        config.colorize = true;
    }
    if let Some(template) = &args.template {
        config.log_template = LogTemplate::from(template.clone());
    }
    config.diff_switches.extend(args.diff_switches.iter().cloned());
    Ok(config)
}

fn run(backend: &JjBackend, dir: &Path, command: Command, colorize: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Root => match backend.root(dir)? {
            Some(root) => writeln!(out, "{}", root.display())?,
            None => return Err(eyre!("not a jj repository: {}", dir.display())),
        },
        Command::State { file } => writeln!(out, "{}", backend.state(dir, &file)?)?,
        Command::Status { files } => {
            let mut entries = Vec::new();
            backend.dir_status_files(dir, &as_strs(&files), &mut |batch| entries.extend(batch))?;
            for entry in entries {
                writeln!(out, "{}\t{}", entry.status, entry.path)?;
            }
        }
        Command::Headers => {
            let report = backend.dir_extra_headers(dir)?;
            terminal::write_text(&mut out, &report.to_text(), colorize)?;
        }
        Command::ModeLine { file } => {
            let mode_line = backend.mode_line_string(dir, &file)?;
            terminal::write_text(&mut out, &Text::from(mode_line.to_span()), colorize)?;
            writeln!(out, "{}", mode_line.tooltip)?;
        }
        Command::Log {
            files,
            limit,
            revision,
        } => {
            let text = backend.log_text(dir, &as_strs(&files), limit, revision.as_deref())?;
            terminal::write_text(&mut out, &text, colorize)?;
        }
        Command::Diff { files, from, to } => {
            let text = backend.diff_text(dir, &as_strs(&files), from.as_deref(), to.as_deref())?;
            terminal::write_text(&mut out, &text, colorize)?;
        }
        Command::Annotate {
            file,
            revision,
            compact: false,
        } => {
            backend.annotate_command(dir, &file, &mut out, revision.as_deref())?;
        }
        Command::Annotate {
            file,
            revision,
            compact: true,
        } => {
            let mut buf = Vec::new();
            backend.annotate_command(dir, &file, &mut buf, revision.as_deref())?;
            let output = String::from_utf8_lossy(&buf);
            for line in vc_jj::jj::parser::Parser::parse_file_annotate(&output) {
                writeln!(out, "{}", compact_annotation(&line))?;
            }
        }
        Command::Show { file, revision } => {
            backend.find_revision(dir, &file, &revision, &mut out)?;
        }
        Command::Revisions { files } => {
            for rev in backend.revision_completion_table(dir, &as_strs(&files))? {
                writeln!(out, "{rev}")?;
            }
        }
        Command::Prev { revision } => {
            if let Some(rev) = backend.previous_revision(dir, &revision)? {
                writeln!(out, "{rev}")?;
            }
        }
        Command::Next { revision } => {
            if let Some(rev) = backend.next_revision(dir, &revision)? {
                writeln!(out, "{rev}")?;
            }
        }
        Command::Commit { message, files } => backend.checkin(dir, &as_strs(&files), &message)?,
        Command::Describe { message, revision } => backend.describe(dir, &revision, &message)?,
        Command::Restore { file } => backend.revert(dir, &file)?,
        Command::Track { files } => backend.register(dir, &as_strs(&files))?,
        Command::Untrack { file } => backend.unregister(dir, &file)?,
        Command::Ignore { file, remove } => {
            let ignore_file = backend.ignore(dir, &file, remove)?;
            writeln!(out, "{}", ignore_file.display())?;
        }
        Command::Init => backend.create_repo(dir)?,
    }

    Ok(())
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

/// One `annotate --compact` row: id, padded author, MM-DD, line, content
fn compact_annotation(line: &AnnotationLine) -> String {
    format!(
        "{} {:<width$} {} {:>5}: {}",
        line.change_id,
        line.short_author(ANNOTATE_AUTHOR_WIDTH),
        line.short_timestamp(),
        line.line_number,
        line.content,
        width = ANNOTATE_AUTHOR_WIDTH
    )
}

//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Claude Code prompt history, one session at a time.
///
/// Reads the newline-delimited history log and prints the prompts of a
/// single session, or of every session recorded for a project.
#[derive(Debug, Parser)]
#[command(
    name = "hist",
    version,
    about,
    long_about = None,
    override_usage = "hist <START_TS_MS> <PROJECT>\n       hist --all <PROJECT>"
)]
pub struct Cli {
    /// Print every session recorded for the project.
    #[arg(long)]
    pub all: bool,

    /// Start timestamp in milliseconds; with --all, the project path instead.
    #[arg(value_name = "START_TS_MS", allow_negative_numbers = true)]
    pub start: Option<String>,

    /// Project path, matched exactly against the log.
    #[arg(value_name = "PROJECT")]
    pub project: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Invocation errors that warrant the usage text and exit code 1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// Invoked with no positional arguments at all.
    #[error("missing required arguments")]
    MissingArguments,

    /// `--all` given without a project path.
    #[error("--all requires a project path")]
    MissingAllProject,

    /// Single-session mode given a timestamp but no project path.
    #[error("single-session mode requires <START_TS_MS> <PROJECT>")]
    MissingProject,

    /// First positional was neither `--all` nor an integer.
    #[error("start timestamp must be an integer, got {0:?}")]
    InvalidStartTimestamp(String),
}

/// The mode an invocation resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the session covering a start timestamp within a project.
    Single { start_ts_ms: i64, project: String },
    /// Print every session for a project, oldest first.
    All { project: String },
}

impl Cli {
    /// Resolve the positional arguments into a mode.
    ///
    /// With `--all` the single positional is the project path; otherwise the
    /// first positional must parse as a millisecond timestamp.
    pub fn mode(&self) -> Result<Mode, UsageError> {
        if self.all {
            let project = self.start.clone().ok_or(UsageError::MissingAllProject)?;
            return Ok(Mode::All { project });
        }

        let start = self.start.as_deref().ok_or(UsageError::MissingArguments)?;
        let project = self.project.clone().ok_or(UsageError::MissingProject)?;
        let start_ts_ms = start
            .parse()
            .map_err(|_| UsageError::InvalidStartTimestamp(start.to_string()))?;

        Ok(Mode::Single {
            start_ts_ms,
            project,
        })
    }
}

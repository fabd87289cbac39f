use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use hist_cli::commands::{session, sessions};
use hist_cli::{Cli, Config, Mode};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Log to stderr so stdout carries only entry lines; try_init avoids a
    // panic if tracing is already initialized (e.g., in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mode = match cli.mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }
    };

    let config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let entries = hist_core::load_history(&config.history_path)
        .with_context(|| format!("failed to read {}", config.history_path.display()))?;
    tracing::debug!(count = entries.len(), "loaded history entries");

    let mut stdout = std::io::stdout().lock();
    match mode {
        Mode::Single {
            start_ts_ms,
            project,
        } => session::run(&mut stdout, &entries, start_ts_ms, &project)?,
        Mode::All { project } => sessions::run(&mut stdout, &entries, &project)?,
    }

    Ok(())
}

//! Claude Code history viewer CLI library.
//!
//! This crate provides the CLI interface for the history viewer.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Mode, UsageError};
pub use config::Config;

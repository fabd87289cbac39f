//! Core domain logic for the Claude Code history viewer.
//!
//! This crate contains the fundamental types and logic for:
//! - Loading: reading the newline-delimited history log
//! - Formatting: rendering one entry as a timestamped line
//! - Sessions: resolving and grouping history entries by session

pub mod entry;
pub mod format;
pub mod log;
pub mod session;

pub use entry::HistoryEntry;
pub use format::format_entry;
pub use log::{HistoryError, load_history};
pub use session::{SessionGroup, find_session_at, project_sessions, session_entries};

//! All-sessions mode: print every session recorded for a project.

use std::io::Write;

use anyhow::Result;

use hist_core::{HistoryEntry, format_entry, project_sessions};

/// Print every session for `project`, oldest session first.
///
/// Sessions are ordered by their earliest timestamp and entries within a
/// session by timestamp; entries that format to nothing are skipped. An
/// unknown project produces no output and is not an error.
pub fn run<W: Write>(writer: &mut W, entries: &[HistoryEntry], project: &str) -> Result<()> {
    let groups = project_sessions(entries, project);
    tracing::debug!(project, sessions = groups.len(), "grouped history entries");

    for group in &groups {
        for entry in &group.entries {
            if let Some(line) = format_entry(entry) {
                writeln!(writer, "{line}")?;
            }
        }
    }

    Ok(())
}

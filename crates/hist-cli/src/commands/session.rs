//! Single-session mode: print the session covering a start timestamp.

use std::io::Write;

use anyhow::Result;

use hist_core::{HistoryEntry, find_session_at, format_entry, session_entries};

/// Print every entry of the session active at `start_ts_ms` in `project`.
///
/// Entries are printed in timestamp order, one line each; entries that
/// format to nothing are skipped. No match anywhere produces no output and
/// is not an error.
pub fn run<W: Write>(
    writer: &mut W,
    entries: &[HistoryEntry],
    start_ts_ms: i64,
    project: &str,
) -> Result<()> {
    let Some(session_id) = find_session_at(entries, start_ts_ms, project) else {
        tracing::debug!(start_ts_ms, project, "no session matched");
        return Ok(());
    };
    tracing::debug!(session_id, "resolved session");

    for entry in session_entries(entries, session_id) {
        if let Some(line) = format_entry(entry) {
            writeln!(writer, "{line}")?;
        }
    }

    Ok(())
}

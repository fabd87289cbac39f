//! Rendering history entries for terminal display.

use chrono::{DateTime, Local};

use crate::entry::HistoryEntry;

/// Replacement for embedded newlines so an entry always renders on one line.
const NEWLINE_MARK: &str = " \u{21b5} ";

/// Render an entry as `[YYYY-MM-DD HH:MM] <display>` in local wall-clock time.
///
/// Entries without a timestamp, or with an absent or empty `display`, render
/// as `None` and contribute no output. A timestamp outside chrono's
/// representable range also renders as `None`.
#[must_use]
pub fn format_entry(entry: &HistoryEntry) -> Option<String> {
    let ts_ms = entry.timestamp?;
    let display = entry.display.as_deref().filter(|d| !d.is_empty())?;

    let time = DateTime::from_timestamp_millis(ts_ms)?.with_timezone(&Local);
    let display = display.replace('\n', NEWLINE_MARK);
    Some(format!("[{}] {display}", time.format("%Y-%m-%d %H:%M")))
}

//! Session resolution and grouping over the history log.

use std::collections::HashMap;

use crate::entry::HistoryEntry;

/// All entries recorded for one session, sorted by timestamp.
#[derive(Debug)]
pub struct SessionGroup<'a> {
    /// The `sessionId` shared by the group; `""` for entries without one.
    pub session_id: &'a str,
    pub entries: Vec<&'a HistoryEntry>,
}

impl SessionGroup<'_> {
    /// Earliest timestamp in the group; entries without one count as 0.
    #[must_use]
    pub fn start_time(&self) -> i64 {
        self.entries
            .iter()
            .map(|e| e.sort_timestamp())
            .min()
            .unwrap_or(0)
    }
}

/// Find the session active at `start_ts_ms` in `project`.
///
/// Scans in loaded (file) order and takes the session of the first entry at
/// or after the timestamp whose project matches exactly. The log writer
/// appends in wall-clock order, so file order is trusted here; a manually
/// edited log can make this land on an unintended session.
#[must_use]
pub fn find_session_at<'a>(
    entries: &'a [HistoryEntry],
    start_ts_ms: i64,
    project: &str,
) -> Option<&'a str> {
    let hit = entries.iter().find(|e| {
        e.timestamp.is_some_and(|ts| ts >= start_ts_ms) && e.project_path() == project
    })?;
    hit.session_id.as_deref()
}

/// All entries carrying `session_id`, regardless of project, sorted by
/// timestamp ascending. Entries without a `sessionId` never match.
#[must_use]
pub fn session_entries<'a>(
    entries: &'a [HistoryEntry],
    session_id: &str,
) -> Vec<&'a HistoryEntry> {
    let mut selected: Vec<&HistoryEntry> = entries
        .iter()
        .filter(|e| e.session_id.as_deref() == Some(session_id))
        .collect();
    selected.sort_by_key(|e| e.sort_timestamp());
    selected
}

/// Every session recorded for `project`, oldest session first.
///
/// Sessions are ordered by their earliest timestamp; the stable sort keeps
/// first-seen key order as the tiebreak when two sessions share a start
/// time. Entries within a group are sorted by timestamp.
#[must_use]
pub fn project_sessions<'a>(entries: &'a [HistoryEntry], project: &str) -> Vec<SessionGroup<'a>> {
    let mut groups: Vec<SessionGroup<'a>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries.iter().filter(|e| e.project_path() == project) {
        let session_id = entry.session_id.as_deref().unwrap_or("");
        if let Some(&i) = index.get(session_id) {
            groups[i].entries.push(entry);
        } else {
            index.insert(session_id, groups.len());
            groups.push(SessionGroup {
                session_id,
                entries: vec![entry],
            });
        }
    }

    for group in &mut groups {
        group.entries.sort_by_key(|e| e.sort_timestamp());
    }
    groups.sort_by_key(SessionGroup::start_time);
    groups
}

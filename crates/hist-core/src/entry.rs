//! The history log record type.

use serde::{Deserialize, Serialize};

/// One parsed line of the history log.
///
/// Every field is optional: the log is appended to by different tool
/// versions and older lines may omit fields. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Prompt text to display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Absolute path of the workspace the prompt was issued from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Session the prompt belongs to.
    #[serde(
        default,
        rename = "sessionId",
        skip_serializing_if = "Option::is_none"
    )]
    pub session_id: Option<String>,
}

impl HistoryEntry {
    /// Timestamp used for ordering; entries without one sort first.
    #[must_use]
    pub fn sort_timestamp(&self) -> i64 {
        self.timestamp.unwrap_or(0)
    }

    /// Project path, with absence comparing as the empty string.
    #[must_use]
    pub fn project_path(&self) -> &str {
        self.project.as_deref().unwrap_or("")
    }
}

//! History log loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::entry::HistoryEntry;

/// Buffer size for `BufReader` (64KB for optimal performance on large files)
const BUFFER_SIZE: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load every entry from the history log, in file order.
///
/// A missing file is an empty history, not an error. Blank lines are skipped
/// without a parse attempt, and lines that fail to parse as JSON are dropped.
pub fn load_history(path: &Path) -> Result<Vec<HistoryEntry>, HistoryError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::with_capacity(BUFFER_SIZE, file);

    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<HistoryEntry>(line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::trace!(error = %e, "skipping malformed history line");
            }
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_missing_file_returns_empty() {
        let path = Path::new("/nonexistent/directory/history.jsonl");
        let entries = load_history(path).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn load_preserves_file_order() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"timestamp":200,"display":"second","project":"/p","sessionId":"s1"}}"#
        )
        .unwrap();
        writeln!(
            file,
            r#"{{"timestamp":100,"display":"first","project":"/p","sessionId":"s1"}}"#
        )
        .unwrap();

        let entries = load_history(file.path()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].display.as_deref(), Some("second"));
        assert_eq!(entries[1].display.as_deref(), Some("first"));
    }

    #[test]
    fn load_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"timestamp":1,"display":"a"}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   \t  ").unwrap();
        writeln!(file, r#"{{"timestamp":2,"display":"b"}}"#).unwrap();

        let entries = load_history(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn load_skips_malformed_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"timestamp":1,"display":"before"}}"#).unwrap();
        writeln!(file, "not json at all").unwrap();
        writeln!(file, r#"{{"timestamp":2,"#).unwrap();
        writeln!(file, r#"{{"timestamp":3,"display":"after"}}"#).unwrap();

        let entries = load_history(file.path()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].display.as_deref(), Some("before"));
        assert_eq!(entries[1].display.as_deref(), Some("after"));
    }

    #[test]
    fn load_skips_truncated_trailing_line() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"timestamp":1,"display":"complete"}}"#).unwrap();
        // Incomplete line at end (simulates file being written to)
        write!(file, r#"{{"timestamp":2,"display":"incompl"#).unwrap();
        file.flush().unwrap();

        let entries = load_history(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display.as_deref(), Some("complete"));
    }

    #[test]
    fn load_keeps_entries_with_extra_fields() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"timestamp":1,"display":"x","pastedContents":{{}},"extra":[1,2]}}"#
        )
        .unwrap();

        let entries = load_history(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn load_empty_file_returns_empty() {
        let file = NamedTempFile::new().unwrap();
        let entries = load_history(file.path()).unwrap();
        assert!(entries.is_empty());
    }
}

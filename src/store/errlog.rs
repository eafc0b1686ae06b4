use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Utc;

/// File name of the append-only error log in the store directory.
const LOG_FILE: &str = ".errors.log";

/// Self-documenting header written at the top of a new log.
const FILE_HEADER: &str = "\
# daylist error log — append-only record of store failures.
# Safe to delete.
";

/// Append a store failure to the error log. Logging failures are ignored:
/// the log is an aid, never a second failure source in an error path.
pub fn log_error(store_dir: &Path, context: &str, error: &dyn std::fmt::Display) {
    let path = store_dir.join(LOG_FILE);
    let is_new = !path.exists();

    let mut file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(_) => return,
    };

    if is_new {
        let _ = file.write_all(FILE_HEADER.as_bytes());
    }
    let line = format!(
        "{} {}: {}\n",
        Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
        context,
        error
    );
    let _ = file.write_all(line.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appends_header_then_entries() {
        let dir = TempDir::new().unwrap();
        log_error(dir.path(), "reorder", &"connection refused");
        log_error(dir.path(), "delete t-2", &"not found");

        let content = std::fs::read_to_string(dir.path().join(LOG_FILE)).unwrap();
        assert!(content.starts_with("# daylist error log"));
        assert!(content.contains("reorder: connection refused"));
        assert!(content.contains("delete t-2: not found"));
        // header only once
        assert_eq!(content.matches("# daylist error log").count(), 1);
    }
}

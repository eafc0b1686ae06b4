use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted TUI state (written to .state.json in the store directory).
/// Restored values are reconciled against the first snapshot, so a stale
/// focus or selection never survives into the first frame.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Focused item id
    #[serde(default)]
    pub focused: Option<String>,
    /// Selected item ids
    #[serde(default)]
    pub selected: HashSet<String>,
    /// Side panel open
    #[serde(default)]
    pub side_panel: bool,
    /// List scroll offset (first visible row)
    #[serde(default)]
    pub scroll_offset: usize,
}

/// Read .state.json from the store directory
pub fn read_ui_state(store_dir: &Path) -> Option<UiState> {
    let path = store_dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the store directory
pub fn write_ui_state(store_dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = store_dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_and_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut state = UiState {
            focused: Some("t-3".into()),
            side_panel: true,
            scroll_offset: 4,
            ..Default::default()
        };
        state.selected.insert("t-1".into());
        state.selected.insert("t-3".into());

        write_ui_state(dir.path(), &state).unwrap();
        let loaded = read_ui_state(dir.path()).unwrap();

        assert_eq!(loaded.focused, Some("t-3".into()));
        assert!(loaded.side_panel);
        assert_eq!(loaded.scroll_offset, 4);
        assert!(loaded.selected.contains("t-1"));
        assert!(loaded.selected.contains("t-3"));
    }

    #[test]
    fn read_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(read_ui_state(dir.path()).is_none());
    }

    #[test]
    fn read_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".state.json"), "not json {{{").unwrap();
        assert!(read_ui_state(dir.path()).is_none());
    }

    #[test]
    fn serde_defaults_on_empty_object() {
        let state: UiState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.focused, None);
        assert!(state.selected.is_empty());
        assert!(!state.side_panel);
        assert_eq!(state.scroll_offset, 0);
    }
}

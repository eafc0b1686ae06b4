use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::model::{Item, ItemDraft, ItemId, ItemPatch, Snapshot, Status};

use super::adapter::{SourceAdapter, StoreError};

/// File name of the task collection inside the store directory.
pub const TASKS_FILE: &str = "tasks.json";

/// On-disk shape of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    items: Vec<Item>,
}

/// JSON-file implementation of the store boundary.
///
/// The file is read whole and written whole; writes are atomic (temp file +
/// rename) so the watcher never observes a half-written store.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: &Path) -> FileStore {
        FileStore {
            dir: dir.to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.dir.join(TASKS_FILE)
    }

    fn read_file(&self) -> Result<StoreFile, StoreError> {
        let path = self.tasks_path();
        if !path.exists() {
            return Ok(StoreFile::default());
        }
        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    fn write_file(&self, file: &StoreFile) -> Result<(), StoreError> {
        let content =
            serde_json::to_string_pretty(file).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        atomic_write(&self.tasks_path(), content.as_bytes())?;
        Ok(())
    }

    /// Allocate the next id: t-1, t-2, ... past the highest existing suffix.
    fn next_id(items: &[Item]) -> ItemId {
        let max = items
            .iter()
            .filter_map(|item| item.id.as_str().strip_prefix("t-"))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        ItemId(format!("t-{}", max + 1))
    }

    fn next_position(items: &[Item]) -> i64 {
        items.iter().map(|item| item.position).max().unwrap_or(-1) + 1
    }
}

impl SourceAdapter for FileStore {
    fn fetch_all(&self) -> Result<Snapshot, StoreError> {
        let file = self.read_file()?;
        Snapshot::from_items(file.items).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    fn create(&mut self, draft: ItemDraft) -> Result<Item, StoreError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let mut file = self.read_file()?;
        let item = Item {
            id: Self::next_id(&file.items),
            title: title.to_string(),
            status: draft.status.unwrap_or(Status::Pending),
            position: Self::next_position(&file.items),
            note: draft.note,
            created_at: Utc::now(),
        };
        file.items.push(item.clone());
        self.write_file(&file)?;
        Ok(item)
    }

    fn update(&mut self, id: &ItemId, patch: ItemPatch) -> Result<Item, StoreError> {
        let mut file = self.read_file()?;
        let item = file
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(status) = patch.status {
            item.status = status;
        }
        if let Some(note) = patch.note {
            item.note = note;
        }
        let updated = item.clone();
        self.write_file(&file)?;
        Ok(updated)
    }

    fn delete(&mut self, id: &ItemId) -> Result<(), StoreError> {
        let mut file = self.read_file()?;
        let before = file.items.len();
        file.items.retain(|item| &item.id != id);
        if file.items.len() == before {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.write_file(&file)
    }

    fn reorder(&mut self, positions: &[(ItemId, i64)]) -> Result<(), StoreError> {
        let mut file = self.read_file()?;
        for (id, position) in positions {
            let item = file
                .items
                .iter_mut()
                .find(|item| &item.id == id)
                .ok_or_else(|| StoreError::NotFound(id.clone()))?;
            item.position = *position;
        }
        self.write_file(&file)
    }
}

/// Write content to a temp file in the same directory, then rename over the
/// target. Readers see either the old file or the new one, never a partial.
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

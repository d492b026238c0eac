use crate::error::StorageError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// One accepted name. The image representation (typically a data URI) is
/// opaque to the core and optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub date: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(name: impl Into<String>, image: Option<String>) -> Self {
        Self {
            name: name.into(),
            image,
            date: Utc::now(),
        }
    }
}

/// Append-only acceptance log. Storage order is chronological; readers want
/// most-recent-first, which `recent` provides.
pub trait HistoryStore: Send + Sync {
    fn load(&self) -> Vec<HistoryEntry>;
    fn save(&self, entries: &[HistoryEntry]);

    fn append(&self, entry: HistoryEntry) {
        let mut entries = self.load();
        entries.push(entry);
        self.save(&entries);
    }

    fn recent(&self) -> Vec<HistoryEntry> {
        let mut entries = self.load();
        entries.reverse();
        entries
    }
}

/// JSON-file-backed history, same infallible-load / best-effort-save
/// contract as the preference store.
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn try_load(&self) -> Result<Vec<HistoryEntry>, StorageError> {
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(|e| StorageError::Read(e.to_string()))
    }

    fn try_save(&self, entries: &[HistoryEntry]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Write(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl HistoryStore for JsonHistoryStore {
    fn load(&self) -> Vec<HistoryEntry> {
        match self.try_load() {
            Ok(entries) => entries,
            Err(StorageError::Io(error)) if error.kind() == ErrorKind::NotFound => Vec::new(),
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "Unusable history file, starting from an empty history"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[HistoryEntry]) {
        if let Err(error) = self.try_save(entries) {
            tracing::warn!(
                path = %self.path.display(),
                %error,
                "Failed to save history, entry not persisted"
            );
        }
    }
}

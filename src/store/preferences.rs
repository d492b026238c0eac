use crate::error::StorageError;
use crate::naming::PreferenceRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Persistence seam for the preference record. Load never fails the caller;
/// save is best effort. A write failure means the in-memory record runs
/// ahead of the persisted one until the next successful save — availability
/// over durability.
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> PreferenceRecord;
    fn save(&self, record: &PreferenceRecord);
}

/// JSON-file-backed store, one pretty-printed record per file.
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn try_load(&self) -> Result<PreferenceRecord, StorageError> {
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(|e| StorageError::Read(e.to_string()))
    }

    fn try_save(&self, record: &PreferenceRecord) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StorageError::Write(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load(&self) -> PreferenceRecord {
        match self.try_load() {
            Ok(record) => record,
            Err(StorageError::Io(error)) if error.kind() == ErrorKind::NotFound => {
                PreferenceRecord::default()
            }
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "Unusable preferences file, starting from an empty record"
                );
                PreferenceRecord::default()
            }
        }
    }

    fn save(&self, record: &PreferenceRecord) {
        if let Err(error) = self.try_save(record) {
            tracing::warn!(
                path = %self.path.display(),
                %error,
                "Failed to save preferences, keeping in-memory record only"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::record_acceptance;

    fn store_in(dir: &tempfile::TempDir) -> JsonPreferenceStore {
        JsonPreferenceStore::new(dir.path().join("preferences.json"))
    }

    #[test]
    fn missing_file_loads_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let record = store_in(&dir).load();
        assert!(!record.has_preferences());
        assert!(record.keywords.is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").unwrap();

        let record = JsonPreferenceStore::new(path).load();
        assert!(!record.has_preferences());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let record =
            record_acceptance(PreferenceRecord::default(), "The Spicy Garden Feast", &[]);
        store.save(&record);

        assert_eq!(store.load(), record);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPreferenceStore::new(dir.path().join("nested/data/preferences.json"));

        store.save(&PreferenceRecord::default());
        assert!(store.load().keywords.is_empty());
        assert!(dir.path().join("nested/data/preferences.json").exists());
    }

    #[test]
    fn save_failure_is_swallowed() {
        // Path sits under a regular file, so the write cannot succeed.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let store = JsonPreferenceStore::new(blocker.join("preferences.json"));
        store.save(&PreferenceRecord::default());
        // No panic, and a later load still answers with a default record.
        assert!(!store.load().has_preferences());
    }
}

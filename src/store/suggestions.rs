use crate::error::StorageError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// The three freshest generated names, kept so a later acceptance can be
/// matched back to its position in the offer. Overwritten on every
/// suggestion round; empty when nothing has been suggested yet.
pub trait SuggestionStore: Send + Sync {
    fn load(&self) -> Vec<String>;
    fn save(&self, names: &[String]);
}

pub struct JsonSuggestionStore {
    path: PathBuf,
}

impl JsonSuggestionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn try_load(&self) -> Result<Vec<String>, StorageError> {
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(|e| StorageError::Read(e.to_string()))
    }

    fn try_save(&self, names: &[String]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json =
            serde_json::to_string_pretty(names).map_err(|e| StorageError::Write(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl SuggestionStore for JsonSuggestionStore {
    fn load(&self) -> Vec<String> {
        match self.try_load() {
            Ok(names) => names,
            Err(StorageError::Io(error)) if error.kind() == ErrorKind::NotFound => Vec::new(),
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "Unusable suggestions file, treating as no pending offer"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, names: &[String]) {
        if let Err(error) = self.try_save(names) {
            tracing::warn!(
                path = %self.path.display(),
                %error,
                "Failed to save suggestions, tone matching unavailable for this round"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_no_pending_offer() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSuggestionStore::new(dir.path().join("suggestions.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_overwrites_the_previous_offer() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSuggestionStore::new(dir.path().join("suggestions.json"));

        store.save(&["A".into(), "B".into(), "C".into()]);
        store.save(&["X".into(), "Y".into(), "Z".into()]);

        assert_eq!(store.load(), vec!["X", "Y", "Z"]);
    }
}

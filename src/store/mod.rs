pub mod history;
pub mod preferences;
pub mod suggestions;

pub use history::{HistoryEntry, HistoryStore, JsonHistoryStore};
pub use preferences::{JsonPreferenceStore, PreferenceStore};
pub use suggestions::{JsonSuggestionStore, SuggestionStore};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::Display;

// ── Preference record ───────────────────────────────────────────────────────

/// Cumulative record of the user's naming taste. Created empty on first use,
/// mutated only by the learner, never deleted. Counters only ever go up.
///
/// Field names serialize in camelCase so the JSON files stay readable next
/// to records written by earlier versions of the product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceRecord {
    /// Accepted names, verbatim, in chronological order of acceptance.
    pub selected_names: Vec<String>,
    /// Lowercase word → acceptance count. `BTreeMap` keeps iteration
    /// deterministic so equal-count ties always break the same way.
    pub keywords: BTreeMap<String, u32>,
    /// Tone slug → acceptance count, filled in when an accepted name can be
    /// matched to its position in the offered set.
    pub tone_preferences: BTreeMap<String, u32>,
}

impl PreferenceRecord {
    pub fn has_preferences(&self) -> bool {
        !self.selected_names.is_empty()
    }

    /// Up to `k` favorite keywords, title-cased, ordered by descending count.
    pub fn top_keywords(&self, k: usize) -> Vec<String> {
        let mut entries: Vec<(&String, u32)> =
            self.keywords.iter().map(|(word, count)| (word, *count)).collect();
        // Stable sort: ties keep the map's lexicographic order.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
            .into_iter()
            .take(k)
            .map(|(word, _)| title_case(word))
            .collect()
    }

    /// The single most-accepted tone, if any tone has been counted.
    pub fn favorite_tone(&self) -> Option<&str> {
        self.tone_preferences
            .iter()
            .max_by_key(|(_, count)| **count)
            .filter(|(_, count)| **count > 0)
            .map(|(tone, _)| tone.as_str())
    }

    /// The `n` most recently accepted names, newest first.
    pub fn recent_names(&self, n: usize) -> Vec<&str> {
        self.selected_names
            .iter()
            .rev()
            .take(n)
            .map(String::as_str)
            .collect()
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ── Name styles ─────────────────────────────────────────────────────────────

/// The three tones a suggestion set spans, in output order. Position i of
/// any 3-name set corresponds to style i, on both generation paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NameStyle {
    Elegant,
    Playful,
    Descriptive,
}

impl NameStyle {
    pub const ALL: [Self; 3] = [Self::Elegant, Self::Playful, Self::Descriptive];

    pub fn for_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }
}

// ── Generation context ──────────────────────────────────────────────────────

/// Transient view over a record, computed per generation call. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    pub has_preferences: bool,
    pub favorite_keywords: Vec<String>,
}

impl GenerationContext {
    pub fn from_record(record: &PreferenceRecord, k: usize) -> Self {
        let has_preferences = record.has_preferences();
        let favorite_keywords = if has_preferences {
            record.top_keywords(k)
        } else {
            Vec::new()
        };
        Self {
            has_preferences,
            favorite_keywords,
        }
    }
}

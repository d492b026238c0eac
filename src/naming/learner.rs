//! Preference learning from accepted names.
//!
//! Pure functions over the record: the caller persists the result and
//! appends the history entry. Keeping this free of I/O (and of any crate the
//! template path doesn't already use) is what makes the learn step safe to
//! run even when persistence is degraded.

use super::types::{NameStyle, PreferenceRecord};

/// Words too generic to count as taste signal, matched exactly after
/// lowercasing.
const STOP_WORDS: &[&str] = &["the", "and", "with", "for"];

/// Fold one acceptance into the record.
///
/// Appends the name verbatim, increments the extracted keyword counts, and
/// when the name can be matched to its position in `offered`, counts the
/// corresponding tone. Counters are only ever incremented.
pub fn record_acceptance(
    mut record: PreferenceRecord,
    name: &str,
    offered: &[String],
) -> PreferenceRecord {
    record.selected_names.push(name.to_string());

    for token in extract_keywords(name) {
        *record.keywords.entry(token).or_insert(0) += 1;
    }

    if let Some(position) = offered.iter().position(|candidate| candidate == name)
        && let Some(style) = NameStyle::for_position(position)
    {
        *record
            .tone_preferences
            .entry(style.to_string())
            .or_insert(0) += 1;
    }

    record
}

/// Tokenize an accepted name into countable keywords: lowercase, split on
/// whitespace runs, keep tokens longer than 3 characters that are not stop
/// words.
pub fn extract_keywords(name: &str) -> Vec<String> {
    name.to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() > 3 && !STOP_WORDS.contains(token))
        .map(ToString::to_string)
        .collect()
}

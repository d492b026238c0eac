//! The preference-learning feedback loop: acceptances flow through the
//! learner into the JSON stores and bias the next generation round.

use nameplate::naming::{PreferenceRecord, record_acceptance, template};
use nameplate::store::{
    HistoryEntry, HistoryStore, JsonHistoryStore, JsonPreferenceStore, JsonSuggestionStore,
    PreferenceStore, SuggestionStore,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn acceptance_learns_keywords_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonPreferenceStore::new(dir.path().join("preferences.json"));

    let record = record_acceptance(store.load(), "The Spicy Garden Feast", &[]);
    store.save(&record);

    let reloaded = store.load();
    assert_eq!(reloaded.selected_names, vec!["The Spicy Garden Feast"]);
    assert_eq!(reloaded.keywords.get("spicy"), Some(&1));
    assert_eq!(reloaded.keywords.get("garden"), Some(&1));
    assert_eq!(reloaded.keywords.get("feast"), Some(&1));
    assert!(!reloaded.keywords.contains_key("the"));
}

#[test]
fn repeated_acceptances_accumulate_across_process_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    // Each round loads fresh, mimicking a new process.
    for name in ["Spicy Harvest Bowl", "Spicy Midnight Curry", "Spicy Dream"] {
        let store = JsonPreferenceStore::new(&path);
        let record = record_acceptance(store.load(), name, &[]);
        store.save(&record);
    }

    let record = JsonPreferenceStore::new(&path).load();
    assert_eq!(record.keywords.get("spicy"), Some(&3));
    assert_eq!(record.selected_names.len(), 3);
    assert_eq!(record.top_keywords(1), vec!["Spicy"]);
}

#[test]
fn learned_keywords_bias_template_output() {
    let mut record = PreferenceRecord::default();
    for name in ["Spicy Garden Feast", "Spicy Garden Curry"] {
        record = record_acceptance(record, name, &[]);
    }
    let favorites = record.top_keywords(3);
    assert!(favorites.contains(&"Spicy".to_string()));

    let mut keyword_name_seen = false;
    for seed in 0..300 {
        let mut rng = StdRng::seed_from_u64(seed);
        let names = template::generate(&record, &mut rng);
        if names
            .iter()
            .any(|name| favorites.iter().any(|keyword| name.contains(keyword.as_str())))
        {
            keyword_name_seen = true;
            break;
        }
    }
    assert!(keyword_name_seen, "learned keywords never surfaced");
}

#[test]
fn tone_counting_uses_the_stored_offer() {
    let dir = tempfile::tempdir().unwrap();
    let suggestion_store = JsonSuggestionStore::new(dir.path().join("suggestions.json"));
    let preference_store = JsonPreferenceStore::new(dir.path().join("preferences.json"));

    let offered = vec![
        "The Golden Delight".to_string(),
        "The Lazy Weekend Curry".to_string(),
        "Smoky Tender Roast".to_string(),
    ];
    suggestion_store.save(&offered);

    let record = record_acceptance(
        preference_store.load(),
        "Smoky Tender Roast",
        &suggestion_store.load(),
    );
    preference_store.save(&record);

    let reloaded = preference_store.load();
    assert_eq!(reloaded.tone_preferences.get("descriptive"), Some(&1));
    assert_eq!(reloaded.favorite_tone(), Some("descriptive"));
}

#[test]
fn history_reads_back_most_recent_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonHistoryStore::new(dir.path().join("history.json"));

    store.append(HistoryEntry::new("First Feast", None));
    store.append(HistoryEntry::new(
        "Second Supper",
        Some("data:image/png;base64,AAA=".into()),
    ));
    store.append(HistoryEntry::new("Third Treat", None));

    let recent = store.recent();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].name, "Third Treat");
    assert_eq!(recent[2].name, "First Feast");
    assert_eq!(
        recent[1].image.as_deref(),
        Some("data:image/png;base64,AAA=")
    );
}

#[test]
fn corrupt_stores_degrade_to_defaults_not_errors() {
    let dir = tempfile::tempdir().unwrap();
    let preferences_path = dir.path().join("preferences.json");
    let history_path = dir.path().join("history.json");
    std::fs::write(&preferences_path, "##").unwrap();
    std::fs::write(&history_path, "{\"wrong\": true}").unwrap();

    assert!(!JsonPreferenceStore::new(preferences_path).load().has_preferences());
    assert!(JsonHistoryStore::new(history_path).load().is_empty());
}

#[test]
fn preference_json_matches_the_original_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let store = JsonPreferenceStore::new(&path);

    let record = record_acceptance(PreferenceRecord::default(), "Creamy Gratin", &[]);
    store.save(&record);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"selectedNames\""));
    assert!(raw.contains("\"keywords\""));
    assert!(raw.contains("\"tonePreferences\""));
}

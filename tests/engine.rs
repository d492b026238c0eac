//! End-to-end behavior of the suggestion engine: the "always 3" guarantee
//! across every provider outcome, and the exact parse of a well-formed
//! generative response.

use nameplate::llm::Provider;
use nameplate::naming::{NameEngine, PreferenceRecord, record_acceptance};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

enum Outcome {
    Reply(&'static str),
    Fail(&'static str),
    Hang,
}

struct FakeProvider {
    outcome: Outcome,
}

impl Provider for FakeProvider {
    fn name(&self) -> &str {
        "fake"
    }

    fn generate<'a>(
        &'a self,
        _system_prompt: Option<&'a str>,
        _prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        Box::pin(async move {
            match &self.outcome {
                Outcome::Reply(text) => Ok((*text).to_string()),
                Outcome::Fail(message) => anyhow::bail!(*message),
                Outcome::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(String::new())
                }
            }
        })
    }
}

fn engine(outcome: Outcome) -> NameEngine {
    NameEngine::new(
        Some(Arc::new(FakeProvider { outcome })),
        Duration::from_millis(100),
    )
}

#[tokio::test]
async fn well_formed_response_is_returned_verbatim() {
    let engine = engine(Outcome::Reply(
        "Golden Sunset Bowl\nThe Lazy Feast\nCrimson Symphony\n",
    ));
    let mut rng = StdRng::seed_from_u64(1);
    let names = engine
        .suggest_names(Some("a noodle soup"), &PreferenceRecord::default(), &mut rng)
        .await;
    assert_eq!(
        names,
        vec!["Golden Sunset Bowl", "The Lazy Feast", "Crimson Symphony"]
    );
}

#[tokio::test]
async fn always_three_names_regardless_of_provider_outcome() {
    let outcomes = [
        Outcome::Reply("One\nTwo\nThree"),
        Outcome::Reply("One\nTwo"),
        Outcome::Reply(""),
        Outcome::Reply("\n\n\n"),
        Outcome::Fail("500 Internal Server Error"),
        Outcome::Fail("401 Unauthorized"),
        Outcome::Hang,
    ];

    for outcome in outcomes {
        let engine = engine(outcome);
        let mut rng = StdRng::seed_from_u64(2);
        let names = engine
            .suggest_names(Some("a curry"), &PreferenceRecord::default(), &mut rng)
            .await;
        assert_eq!(names.len(), 3);
        assert!(names.iter().all(|name| !name.trim().is_empty()));
    }
}

#[tokio::test]
async fn always_three_names_with_populated_preferences() {
    let mut record = PreferenceRecord::default();
    for name in ["Spicy Garden Feast", "Spicy Midnight Curry", "Golden Harvest Bowl"] {
        record = record_acceptance(record, name, &[]);
    }

    for outcome in [Outcome::Reply("A\nB"), Outcome::Fail("boom")] {
        let engine = engine(outcome);
        let mut rng = StdRng::seed_from_u64(3);
        let names = engine.suggest_names(Some("a curry"), &record, &mut rng).await;
        assert_eq!(names.len(), 3);
        assert!(names.iter().all(|name| !name.trim().is_empty()));
    }
}

#[tokio::test]
async fn template_only_engine_satisfies_the_guarantee() {
    let engine = NameEngine::template_only();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let names = engine
            .suggest_names(None, &PreferenceRecord::default(), &mut rng)
            .await;
        assert_eq!(names.len(), 3);
        assert!(names.iter().all(|name| !name.trim().is_empty()));
    }
}

#[tokio::test]
async fn extra_lines_beyond_three_are_dropped() {
    let engine = engine(Outcome::Reply("First\nSecond\nThird\nFourth\nFifth"));
    let mut rng = StdRng::seed_from_u64(4);
    let names = engine
        .suggest_names(Some("a salad"), &PreferenceRecord::default(), &mut rng)
        .await;
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

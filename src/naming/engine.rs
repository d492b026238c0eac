//! Description-driven name generation with a total template fallback.
//!
//! The engine is the designated absorber of upstream failures on the
//! generation path: provider errors, timeouts, and unusable output all
//! degrade to the dependency-free template generator, so the caller always
//! receives exactly three names.

use super::template;
use super::types::PreferenceRecord;
use crate::error::GenerationError;
use crate::llm::Provider;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

/// Instruction sent with the dish photo to the vision provider.
pub const DESCRIBE_INSTRUCTION: &str = "Describe this dish in one or two sentences: the main \
     ingredients, colors, cooking style, and overall impression. Respond with the description \
     only.";

const SUGGEST_SYSTEM_PROMPT: &str = "You name dishes for a home cook. Given a description of a \
     dish, respond with exactly 3 name suggestions, one per line, each 2-5 words long. The first \
     should be elegant and poetic, the second playful and fun, the third descriptive and plain. \
     No numbering, no commentary, just the three names.";

const CONTEXT_KEYWORDS: usize = 5;
const CONTEXT_RECENT_NAMES: usize = 5;

pub struct NameEngine {
    provider: Option<Arc<dyn Provider>>,
    generation_timeout: Duration,
}

impl NameEngine {
    pub fn new(provider: Option<Arc<dyn Provider>>, generation_timeout: Duration) -> Self {
        Self {
            provider,
            generation_timeout,
        }
    }

    /// An engine that only ever runs the template path.
    pub fn template_only() -> Self {
        Self::new(None, Duration::from_secs(0))
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Suggest exactly 3 names for the described dish. Never fails: with no
    /// provider, no description, or any provider failure the template
    /// generator answers instead.
    pub async fn suggest_names(
        &self,
        description: Option<&str>,
        record: &PreferenceRecord,
        rng: &mut impl Rng,
    ) -> Vec<String> {
        if let (Some(provider), Some(description)) = (self.provider.as_ref(), description) {
            match self.try_generative(provider.as_ref(), description, record).await {
                Ok(names) => return names,
                Err(error) => {
                    tracing::warn!(
                        provider = provider.name(),
                        %error,
                        "Generative path unusable, using template fallback"
                    );
                }
            }
        }

        template::generate(record, rng)
    }

    /// The primary strategy: one generative call, parsed into 3 lines.
    /// Every failure mode maps to a typed error so the fallback decision is
    /// made in exactly one place.
    async fn try_generative(
        &self,
        provider: &dyn Provider,
        description: &str,
        record: &PreferenceRecord,
    ) -> Result<Vec<String>, GenerationError> {
        let prompt = build_user_prompt(description, record);
        let response = tokio::time::timeout(
            self.generation_timeout,
            provider.generate(Some(SUGGEST_SYSTEM_PROMPT), &prompt),
        )
        .await
        .map_err(|_| GenerationError::Timeout {
            timeout_secs: self.generation_timeout.as_secs(),
        })?
        .map_err(|error| GenerationError::Request {
            provider: provider.name().to_string(),
            message: error.to_string(),
        })?;

        let names = parse_names(&response);
        if names.len() == 3 {
            Ok(names)
        } else {
            Err(GenerationError::UnusableOutput(format!(
                "expected 3 usable lines, got {}",
                names.len()
            )))
        }
    }
}

/// First 3 non-empty trimmed lines of a generative response.
fn parse_names(response: &str) -> Vec<String> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(3)
        .map(ToString::to_string)
        .collect()
}

fn build_user_prompt(description: &str, record: &PreferenceRecord) -> String {
    let mut prompt = format!("Dish description: {description}");
    let context = preference_context(record);
    if !context.is_empty() {
        prompt.push_str("\n\n");
        prompt.push_str(&context);
    }
    prompt
}

/// Summary of the user's taste for the generative call. Empty until at least
/// one name has been accepted.
fn preference_context(record: &PreferenceRecord) -> String {
    if !record.has_preferences() {
        return String::new();
    }

    let mut context = String::from("The user's naming taste so far:\n");

    let keywords = record.top_keywords(CONTEXT_KEYWORDS);
    if !keywords.is_empty() {
        context.push_str(&format!("- Favorite words: {}\n", keywords.join(", ")));
    }

    let recent = record.recent_names(CONTEXT_RECENT_NAMES);
    if !recent.is_empty() {
        context.push_str(&format!("- Recently chosen names: {}\n", recent.join("; ")));
    }

    if let Some(tone) = record.favorite_tone() {
        context.push_str(&format!("- Most often picks the {tone} option\n"));
    }

    context
}

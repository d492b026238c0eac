use super::anthropic::AnthropicProvider;
use super::openai::OpenAiProvider;
use super::reliable::ReliableProvider;
use super::traits::Provider;
use crate::config::Config;
use std::sync::Arc;

/// Build the configured provider, wrapped in retry + fallback behavior.
///
/// Returns `None` when no provider is configured or credentials are missing;
/// the suggestion engine then runs template-only. An unusable provider is
/// never an error at startup: the template path keeps the product working.
pub fn create_provider(config: &Config) -> Option<Arc<dyn Provider>> {
    if config.provider == "none" {
        return None;
    }

    let Some(api_key) = config.resolve_api_key() else {
        tracing::warn!(
            provider = config.provider.as_str(),
            "Provider configured without credentials, running template-only"
        );
        return None;
    };

    let inner: Box<dyn Provider> = match config.provider.as_str() {
        "anthropic" => Box::new(
            AnthropicProvider::new(
                Some(&api_key),
                config.model.as_deref(),
                config.vision_model.as_deref(),
            )
            .with_temperature(config.temperature),
        ),
        "openai" => Box::new(
            OpenAiProvider::new(
                Some(&api_key),
                config.model.as_deref(),
                config.vision_model.as_deref(),
            )
            .with_temperature(config.temperature),
        ),
        other => {
            tracing::warn!(provider = other, "Unknown provider, running template-only");
            return None;
        }
    };

    Some(Arc::new(ReliableProvider::new(
        vec![(config.provider.clone(), inner)],
        config.max_retries,
        config.retry_backoff_ms,
    )))
}

use super::Commands;
use crate::config::Config;
use crate::error::{DescribeError, Result};
use crate::llm::{ImageData, Provider, create_provider};
use crate::naming::{DESCRIBE_INSTRUCTION, NameEngine, NameStyle, record_acceptance};
use crate::store::{
    HistoryEntry, HistoryStore, JsonHistoryStore, JsonPreferenceStore, JsonSuggestionStore,
    PreferenceStore, SuggestionStore,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Suggest { image, describe } => handle_suggest(config, image, describe).await,
        Commands::Accept { name, image } => handle_accept(config, &name, image.as_deref()),
        Commands::History { limit } => handle_history(config, limit),
    }
}

async fn handle_suggest(
    config: &Config,
    image: Option<PathBuf>,
    describe: Option<String>,
) -> Result<()> {
    let provider = create_provider(config);
    let preference_store = JsonPreferenceStore::new(config.preferences_path());
    let suggestion_store = JsonSuggestionStore::new(config.suggestions_path());
    let record = preference_store.load();

    let description = match describe {
        Some(text) => Some(text),
        None => match (provider.as_ref(), image.as_deref()) {
            (Some(provider), Some(path)) => {
                describe_dish(provider.as_ref(), path, config.request_timeout_secs).await
            }
            (None, Some(_)) => {
                tracing::warn!(
                    error = %DescribeError::NoProvider,
                    "Ignoring image, suggesting from templates"
                );
                None
            }
            _ => None,
        },
    };

    let engine = NameEngine::new(provider, Duration::from_secs(config.request_timeout_secs));
    let mut rng = rand::rng();
    let names = engine
        .suggest_names(description.as_deref(), &record, &mut rng)
        .await;

    suggestion_store.save(&names);

    for (style, name) in NameStyle::ALL.iter().zip(&names) {
        println!("{style:>12}  {name}");
    }
    Ok(())
}

/// Ask the vision provider for a dish description. Any failure is absorbed:
/// the suggestion round proceeds without a description (template path).
async fn describe_dish(provider: &dyn Provider, path: &Path, timeout_secs: u64) -> Option<String> {
    match try_describe(provider, path, timeout_secs).await {
        Ok(description) => Some(description),
        Err(error) => {
            tracing::warn!(
                provider = provider.name(),
                path = %path.display(),
                %error,
                "Image description unavailable, continuing without it"
            );
            None
        }
    }
}

async fn try_describe(
    provider: &dyn Provider,
    path: &Path,
    timeout_secs: u64,
) -> std::result::Result<String, DescribeError> {
    if !provider.supports_vision() {
        return Err(DescribeError::NoProvider);
    }
    let image = ImageData::from_path(path)?;
    tokio::time::timeout(
        Duration::from_secs(timeout_secs),
        provider.describe_image(DESCRIBE_INSTRUCTION, &image),
    )
    .await
    .map_err(|_| DescribeError::Request(format!("timed out after {timeout_secs}s")))?
    .map_err(|error| DescribeError::Request(error.to_string()))
}

fn handle_accept(config: &Config, name: &str, image: Option<&Path>) -> Result<()> {
    if name.trim().is_empty() {
        return Err(anyhow::anyhow!("name must not be empty").into());
    }

    let preference_store = JsonPreferenceStore::new(config.preferences_path());
    let history_store = JsonHistoryStore::new(config.history_path());
    let suggestion_store = JsonSuggestionStore::new(config.suggestions_path());

    let offered = suggestion_store.load();
    let record = preference_store.load();
    let updated = record_acceptance(record, name, &offered);
    preference_store.save(&updated);

    let image_uri = image.and_then(|path| match ImageData::from_path(path) {
        Ok(image) => Some(image.to_data_uri()),
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                %error,
                "Cannot read image, recording acceptance without it"
            );
            None
        }
    });
    history_store.append(HistoryEntry::new(name, image_uri));

    println!("Recorded \"{name}\".");
    Ok(())
}

fn handle_history(config: &Config, limit: Option<usize>) -> Result<()> {
    let history_store = JsonHistoryStore::new(config.history_path());
    let entries = history_store.recent();

    if entries.is_empty() {
        println!("No names accepted yet.");
        return Ok(());
    }

    let shown = limit.unwrap_or(entries.len());
    for entry in entries.iter().take(shown) {
        println!("{}  {}", entry.date.format("%Y-%m-%d %H:%M"), entry.name);
    }
    Ok(())
}

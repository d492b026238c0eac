use crate::error::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to nameplate.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Provider for description-driven generation: "anthropic", "openai",
    /// or "none" to run template-only.
    #[serde(default = "default_provider")]
    pub provider: String,

    /// API key; falls back to the provider's environment variable when unset.
    pub api_key: Option<String>,

    /// Text-generation model. Provider default when unset.
    pub model: Option<String>,

    /// Vision model for image description. Falls back to `model`.
    pub vision_model: Option<String>,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Cap on a single generative call; expiry triggers the template fallback.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Directory holding preferences.json and history.json.
    /// Defaults to ~/.nameplate/data.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_provider() -> String {
    "none".to_string()
}

fn default_temperature() -> f64 {
    0.8
}

fn default_request_timeout_secs() -> u64 {
    20
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: Self::default_config_path(),
            provider: default_provider(),
            api_key: None,
            model: None,
            vision_model: None,
            temperature: default_temperature(),
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            data_dir: None,
        }
    }
}

impl Config {
    fn home_dir() -> PathBuf {
        UserDirs::new().map_or_else(|| PathBuf::from("."), |dirs| dirs.home_dir().to_path_buf())
    }

    fn default_config_path() -> PathBuf {
        Self::home_dir().join(".nameplate").join("nameplate.toml")
    }

    /// Load the config file if present, falling back to defaults otherwise.
    /// A missing file never blocks startup; a malformed one does.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Self::default_config_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
        let mut config: Self =
            toml::from_str(&raw).map_err(|e| ConfigError::Load(e.to_string()))?;
        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.provider.as_str() {
            "anthropic" | "openai" | "none" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "unknown provider '{other}' (expected anthropic, openai, or none)"
                )));
            }
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Validation(format!(
                "temperature {} out of range 0.0..=2.0",
                self.temperature
            )));
        }
        Ok(())
    }

    /// Resolved credential: explicit config value, then the provider's
    /// conventional environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = self.api_key.as_deref()
            && !key.trim().is_empty()
        {
            return Some(key.trim().to_string());
        }
        let var = match self.provider.as_str() {
            "anthropic" => "ANTHROPIC_API_KEY",
            "openai" => "OPENAI_API_KEY",
            _ => return None,
        };
        std::env::var(var).ok().filter(|v| !v.trim().is_empty())
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| Self::home_dir().join(".nameplate").join("data"))
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir().join("preferences.json")
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir().join("history.json")
    }

    pub fn suggestions_path(&self) -> PathBuf {
        self.data_dir().join("suggestions.json")
    }
}

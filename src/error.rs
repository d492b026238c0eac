use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `nameplate`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal provider code continues to use
/// `anyhow::Result` for ad-hoc context chains. Most of these never reach the
/// end user: describe and generation failures are absorbed by the engine's
/// template fallback, and storage failures degrade to default records.
#[derive(Debug, Error)]
pub enum NameplateError {
    // ── Image description ───────────────────────────────────────────────
    #[error("describe: {0}")]
    Describe(#[from] DescribeError),

    // ── Text generation ─────────────────────────────────────────────────
    #[error("generation: {0}")]
    Generation(#[from] GenerationError),

    // ── Persistence ─────────────────────────────────────────────────────
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    // ── Config ──────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Describe errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum DescribeError {
    #[error("no vision-capable provider configured")]
    NoProvider,

    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),

    #[error("vision request failed: {0}")]
    Request(String),
}

// ─── Generation errors ──────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("provider {provider} request failed: {message}")]
    Request { provider: String, message: String },

    #[error("response unusable: {0}")]
    UnusableOutput(String),

    #[error("generation timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

// ─── Storage errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("read failed: {0}")]
    Read(String),

    #[error("write failed: {0}")]
    Write(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Config errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, NameplateError>;

// ── Infrastructure ───────────────────────────────────────────────────────────
pub mod http_client;
pub mod traits;

// ── Decorator layers ────────────────────────────────────────────────────────
pub mod factory;
pub mod reliable;

// ── Provider implementations ────────────────────────────────────────────────
pub mod anthropic;
pub mod openai;

// ── Re-exports ──────────────────────────────────────────────────────────────
pub use anthropic::AnthropicProvider;
pub use factory::create_provider;
pub use http_client::build_provider_client;
pub use openai::OpenAiProvider;
pub use reliable::ReliableProvider;
pub use traits::{ImageData, Provider};

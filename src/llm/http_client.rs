use reqwest::Client;
use std::time::Duration;

/// Shared client shape for all providers. The outer timeout is a safety net;
/// per-call deadlines are applied by the callers that need tighter ones.
pub fn build_provider_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
        .unwrap_or_else(|_| Client::new())
}

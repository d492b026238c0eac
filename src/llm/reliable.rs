use super::traits::{ImageData, Provider};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Check if an error is non-retryable (client errors that won't resolve with retries).
fn is_non_retryable(err: &anyhow::Error) -> bool {
    let msg = err.to_string();
    if is_quota_exhausted(&msg) {
        return true;
    }

    // Check for reqwest status errors (returned by .error_for_status())
    if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>()
        && let Some(status) = reqwest_err.status()
    {
        let code = status.as_u16();
        // 4xx client errors are non-retryable, except:
        // - 429 Too Many Requests (rate limiting, transient)
        // - 408 Request Timeout (transient)
        return status.is_client_error() && code != 429 && code != 408;
    }
    // String fallback: scan for any 4xx status code in error message
    for word in msg.split(|c: char| !c.is_ascii_digit()) {
        if let Ok(code) = word.parse::<u16>()
            && (400..500).contains(&code)
        {
            return code != 429 && code != 408;
        }
    }
    false
}

fn is_quota_exhausted(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("insufficient_quota")
        || lower.contains("exceeded your current quota")
        || lower.contains("billing")
}

/// Provider wrapper with retry + fallback behavior.
pub struct ReliableProvider {
    providers: Vec<(String, Box<dyn Provider>)>,
    max_retries: u32,
    base_backoff_ms: u64,
}

impl ReliableProvider {
    pub fn new(
        providers: Vec<(String, Box<dyn Provider>)>,
        max_retries: u32,
        base_backoff_ms: u64,
    ) -> Self {
        Self {
            providers,
            max_retries,
            base_backoff_ms: base_backoff_ms.max(50),
        }
    }
}

impl Provider for ReliableProvider {
    fn name(&self) -> &str {
        self.providers
            .first()
            .map_or("reliable", |(name, _)| name.as_str())
    }

    fn supports_vision(&self) -> bool {
        self.providers
            .iter()
            .any(|(_, provider)| provider.supports_vision())
    }

    fn generate<'a>(
        &'a self,
        system_prompt: Option<&'a str>,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let mut failures = Vec::new();

            for (provider_name, provider) in &self.providers {
                let mut backoff_ms = self.base_backoff_ms;

                for attempt in 0..=self.max_retries {
                    match provider.generate(system_prompt, prompt).await {
                        Ok(resp) => {
                            if attempt > 0 {
                                tracing::info!(
                                    provider = provider_name.as_str(),
                                    attempt,
                                    "Provider recovered after retries"
                                );
                            }
                            return Ok(resp);
                        }
                        Err(e) => {
                            let non_retryable = is_non_retryable(&e);
                            failures.push(format!(
                                "{provider_name} attempt {}/{}: {e}",
                                attempt + 1,
                                self.max_retries + 1
                            ));

                            if non_retryable {
                                tracing::warn!(
                                    provider = provider_name.as_str(),
                                    "Non-retryable error, switching provider"
                                );
                                break;
                            }

                            if attempt < self.max_retries {
                                tracing::warn!(
                                    provider = provider_name.as_str(),
                                    attempt = attempt + 1,
                                    max_retries = self.max_retries,
                                    "Provider call failed, retrying"
                                );
                                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                                backoff_ms = (backoff_ms.saturating_mul(2)).min(10_000);
                            }
                        }
                    }
                }

                tracing::warn!(
                    provider = provider_name.as_str(),
                    "Switching to fallback provider"
                );
            }

            anyhow::bail!("All providers failed. Attempts:\n{}", failures.join("\n"))
        })
    }

    fn describe_image<'a>(
        &'a self,
        instruction: &'a str,
        image: &'a ImageData,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let mut failures = Vec::new();

            for (provider_name, provider) in &self.providers {
                let mut backoff_ms = self.base_backoff_ms;

                for attempt in 0..=self.max_retries {
                    match provider.describe_image(instruction, image).await {
                        Ok(resp) => {
                            if attempt > 0 {
                                tracing::info!(
                                    provider = provider_name.as_str(),
                                    attempt,
                                    "Provider recovered after retries"
                                );
                            }
                            return Ok(resp);
                        }
                        Err(e) => {
                            let non_retryable = is_non_retryable(&e);
                            failures.push(format!(
                                "{provider_name} attempt {}/{}: {e}",
                                attempt + 1,
                                self.max_retries + 1
                            ));

                            if non_retryable {
                                tracing::warn!(
                                    provider = provider_name.as_str(),
                                    "Non-retryable error, switching provider"
                                );
                                break;
                            }

                            if attempt < self.max_retries {
                                tracing::warn!(
                                    provider = provider_name.as_str(),
                                    attempt = attempt + 1,
                                    max_retries = self.max_retries,
                                    "Provider call failed, retrying"
                                );
                                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                                backoff_ms = (backoff_ms.saturating_mul(2)).min(10_000);
                            }
                        }
                    }
                }

                tracing::warn!(
                    provider = provider_name.as_str(),
                    "Switching to fallback provider"
                );
            }

            anyhow::bail!("All providers failed. Attempts:\n{}", failures.join("\n"))
        })
    }
}

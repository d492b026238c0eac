use super::http_client::build_provider_client;
use super::traits::{ImageData, Provider};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const MAX_TOKENS: u32 = 1024;
const MISSING_API_KEY_MESSAGE: &str =
    "OpenAI API key not set. Set OPENAI_API_KEY or edit nameplate.toml.";

// ── Wire types ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

// ── Provider ────────────────────────────────────────────────────────────────

pub struct OpenAiProvider {
    /// Pre-computed `"Bearer <key>"` header value (avoids `format!` per request).
    cached_auth_header: Option<String>,
    cached_completions_url: String,
    model: String,
    vision_model: String,
    temperature: f64,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(api_key: Option<&str>, model: Option<&str>, vision_model: Option<&str>) -> Self {
        Self::with_base_url(api_key, model, vision_model, None)
    }

    pub fn with_base_url(
        api_key: Option<&str>,
        model: Option<&str>,
        vision_model: Option<&str>,
        base_url: Option<&str>,
    ) -> Self {
        let base = base_url
            .map_or("https://api.openai.com", |u| u.trim_end_matches('/'))
            .to_string();
        let model = model.unwrap_or(DEFAULT_MODEL).to_string();
        let vision_model = vision_model.map_or_else(|| model.clone(), ToString::to_string);
        Self {
            cached_auth_header: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(|k| format!("Bearer {k}")),
            cached_completions_url: format!("{base}/v1/chat/completions"),
            model,
            vision_model,
            temperature: 0.8,
            client: build_provider_client(),
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    fn extract_text(chat_response: ChatResponse) -> anyhow::Result<String> {
        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| anyhow::anyhow!("No response from OpenAI"))
    }

    async fn call_api(&self, request: &ChatRequest) -> anyhow::Result<ChatResponse> {
        let auth_header = self
            .cached_auth_header
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!(MISSING_API_KEY_MESSAGE))?;

        let response = self
            .client
            .post(&self.cached_completions_url)
            .header("Authorization", auth_header)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI API error ({status}): {body}");
        }
        Ok(response.json().await?)
    }
}

impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn supports_vision(&self) -> bool {
        true
    }

    fn generate<'a>(
        &'a self,
        system_prompt: Option<&'a str>,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let mut messages = Vec::with_capacity(2);
            if let Some(system) = system_prompt {
                messages.push(Message {
                    role: "system",
                    content: MessageContent::Text(system.to_string()),
                });
            }
            messages.push(Message {
                role: "user",
                content: MessageContent::Text(prompt.to_string()),
            });

            let request = ChatRequest {
                model: self.model.clone(),
                messages,
                max_tokens: MAX_TOKENS,
                temperature: self.temperature,
            };
            let response = self.call_api(&request).await?;
            Self::extract_text(response)
        })
    }

    fn describe_image<'a>(
        &'a self,
        instruction: &'a str,
        image: &'a ImageData,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let request = ChatRequest {
                model: self.vision_model.clone(),
                messages: vec![Message {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: instruction.to_string(),
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: image.to_data_uri(),
                            },
                        },
                    ]),
                }],
                max_tokens: MAX_TOKENS,
                temperature: self.temperature,
            };
            let response = self.call_api(&request).await?;
            Self::extract_text(response)
        })
    }
}

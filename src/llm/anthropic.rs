use super::http_client::build_provider_client;
use super::traits::{ImageData, Provider};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
const MAX_TOKENS: u32 = 1024;

// ── Wire types ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<Message>,
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
    Blocks(Vec<InputContentBlock>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum InputContentBlock {
    Text { text: String },
    Image { source: AnthropicImageSource },
}

#[derive(Serialize)]
struct AnthropicImageSource {
    #[serde(rename = "type")]
    kind: &'static str,
    media_type: String,
    data: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    content: Vec<ResponseContentBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Unsupported,
}

// ── Provider ────────────────────────────────────────────────────────────────

pub struct AnthropicProvider {
    /// Pre-computed `("x-api-key", "<key>")` header.
    cached_auth: Option<(&'static str, String)>,
    cached_messages_url: String,
    model: String,
    vision_model: String,
    temperature: f64,
    client: Client,
}

impl AnthropicProvider {
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
            .map_or("https://api.anthropic.com", |u| u.trim_end_matches('/'))
            .to_string();
        let cached_auth = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|k| ("x-api-key", k.to_string()));
        let model = model.unwrap_or(DEFAULT_MODEL).to_string();
        let vision_model = vision_model.map_or_else(|| model.clone(), ToString::to_string);
        Self {
            cached_auth,
            cached_messages_url: format!("{base}/v1/messages"),
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

    fn extract_text(chat_response: &ChatResponse) -> anyhow::Result<String> {
        let text = chat_response
            .content
            .iter()
            .filter_map(|block| match block {
                ResponseContentBlock::Text { text } => Some(text.as_str()),
                ResponseContentBlock::Unsupported => None,
            })
            .collect::<Vec<_>>()
            .join("\n");

        if text.is_empty() {
            anyhow::bail!("No response from Anthropic");
        }
        Ok(text)
    }

    async fn call_api(&self, request: &ChatRequest) -> anyhow::Result<ChatResponse> {
        let (auth_name, auth_value) = self
            .cached_auth
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Anthropic API key not set. Set ANTHROPIC_API_KEY or edit nameplate.toml."))?;

        let response = self
            .client
            .post(&self.cached_messages_url)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .header(*auth_name, auth_value)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Anthropic API error ({status}): {body}");
        }
        Ok(response.json().await?)
    }
}

impl Provider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
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
            let request = ChatRequest {
                model: self.model.clone(),
                max_tokens: MAX_TOKENS,
                system: system_prompt.map(ToString::to_string),
                messages: vec![Message {
                    role: "user",
                    content: MessageContent::Text(prompt.to_string()),
                }],
                temperature: self.temperature,
            };
            let response = self.call_api(&request).await?;
            Self::extract_text(&response)
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
                max_tokens: MAX_TOKENS,
                system: None,
                messages: vec![Message {
                    role: "user",
                    content: MessageContent::Blocks(vec![
                        InputContentBlock::Image {
                            source: AnthropicImageSource {
                                kind: "base64",
                                media_type: image.media_type.clone(),
                                data: image.to_base64(),
                            },
                        },
                        InputContentBlock::Text {
                            text: instruction.to_string(),
                        },
                    ]),
                }],
                temperature: self.temperature,
            };
            let response = self.call_api(&request).await?;
            Self::extract_text(&response)
        })
    }
}

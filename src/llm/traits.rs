use crate::error::DescribeError;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use std::future::Future;
use std::path::Path;
use std::pin::Pin;

/// Image payload handed to a vision-capable provider. Raw bytes plus the
/// MIME type; base64 encoding happens at the provider edge.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub media_type: String,
    pub data: Vec<u8>,
}

impl ImageData {
    pub fn new(media_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            data,
        }
    }

    /// Read an image file, inferring the MIME type from the extension.
    /// The accepted set matches what the suggestion flow accepts for upload.
    pub fn from_path(path: &Path) -> Result<Self, DescribeError> {
        let media_type = match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("webp") => "image/webp",
            Some("gif") => "image/gif",
            other => {
                return Err(DescribeError::UnsupportedImage(
                    other.unwrap_or("<none>").to_string(),
                ));
            }
        };
        let data = std::fs::read(path)
            .map_err(|e| DescribeError::Request(format!("{}: {e}", path.display())))?;
        Ok(Self::new(media_type, data))
    }

    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.data)
    }

    /// `data:` URI form, used when recording the displayed image in history.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.to_base64())
    }
}

/// External generative collaborator: one text call, one vision call.
///
/// Futures are manually boxed so the trait stays object-safe and mockable
/// without extra derive machinery. Implementations return `anyhow` errors;
/// classification into the crate taxonomy happens at the absorbing seam.
pub trait Provider: Send + Sync {
    /// Provider identifier (e.g. "anthropic", "openai").
    fn name(&self) -> &str;

    fn supports_vision(&self) -> bool {
        false
    }

    /// One-shot text generation with an optional system prompt.
    fn generate<'a>(
        &'a self,
        system_prompt: Option<&'a str>,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>>;

    /// Describe an image per `instruction`. Default refuses; vision-capable
    /// providers override.
    fn describe_image<'a>(
        &'a self,
        _instruction: &'a str,
        _image: &'a ImageData,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        Box::pin(async move { anyhow::bail!("provider {} has no vision support", self.name()) })
    }
}

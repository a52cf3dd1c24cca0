use async_trait::async_trait;

use crate::config::PluginConfig;
use crate::generation::{GeneratedImage, GenerationRequest, ImageGenerationClient};
use crate::seed::SeedSetting;
use crate::{QwenImageError, Result};

/// Command keyword the host dispatches on.
pub const COMMAND: &str = "qwen";

/// Hint shown when the prompt is missing.
pub const USAGE: &str = "Please provide a prompt. Usage: /qwen <prompt>";

/// One chat-visible result. Every invocation produces exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    Text(String),
    Image { url: String, seed: i64 },
}

/// Seam toward the hosting chat framework: one command keyword, one reply per
/// dispatched message.
#[async_trait]
pub trait ChatCommand: Send + Sync {
    fn command(&self) -> &str;

    async fn handle(&self, message: &str) -> ChatReply;
}

/// `/qwen <prompt>` — forwards the prompt to the image generation API and
/// replies with the resulting image URL.
pub struct QwenImageCommand {
    client: ImageGenerationClient,
    model: String,
    size: String,
    num_inference_steps: u32,
    seed: SeedSetting,
}

impl QwenImageCommand {
    /// Validates the credential and captures the generation parameters. A
    /// missing or placeholder `api_key` refuses to construct the command.
    pub fn from_config(config: &PluginConfig) -> Result<Self> {
        config.validate_api_key()?;

        let client = ImageGenerationClient::new(config.api_key.clone())
            .with_base_url(config.api_url.clone());

        Ok(Self {
            client,
            model: config.model.clone(),
            size: config.size.clone(),
            num_inference_steps: config.num_inference_steps,
            seed: SeedSetting::parse(&config.seed),
        })
    }

    /// Swap the underlying HTTP client. Primarily a test seam.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.client = self.client.with_http_client(http);
        self
    }

    async fn generate(&self, prompt: &str) -> Result<GeneratedImage> {
        let request = GenerationRequest {
            prompt: prompt.to_string(),
            model: self.model.clone(),
            size: self.size.clone(),
            num_inference_steps: self.num_inference_steps,
            seed: self.seed.resolve(),
        };
        self.client.generate(&request).await
    }
}

#[async_trait]
impl ChatCommand for QwenImageCommand {
    fn command(&self) -> &str {
        COMMAND
    }

    async fn handle(&self, message: &str) -> ChatReply {
        let Some(prompt) = extract_prompt(message) else {
            return ChatReply::Text(USAGE.to_string());
        };

        match self.generate(prompt).await {
            Ok(image) => ChatReply::Image {
                url: image.url,
                seed: image.seed,
            },
            Err(err) => {
                tracing::warn!(error = %err, "image generation failed");
                ChatReply::Text(describe_error(&err))
            }
        }
    }
}

/// Everything after the command token, trimmed; `None` when absent or blank.
fn extract_prompt(message: &str) -> Option<&str> {
    let (_, rest) = message.split_once(char::is_whitespace)?;
    let prompt = rest.trim();
    (!prompt.is_empty()).then_some(prompt)
}

fn describe_error(err: &QwenImageError) -> String {
    match err {
        QwenImageError::Api { status, message } => {
            format!(
                "image generation failed (HTTP {}): {message}",
                status.as_u16()
            )
        }
        QwenImageError::InvalidResponse(body) => {
            format!("image generation failed: API returned invalid data - {body}")
        }
        QwenImageError::MalformedResponse(body) => {
            format!("image generation failed: unexpected API response shape - {body}")
        }
        err => format!("unexpected error while generating image: {err}"),
    }
}

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::utils::snippet;
use crate::{QwenImageError, Result};

const GENERATIONS_PATH: &str = "/v1/images/generations";

const HTTP_TIMEOUT: Duration = Duration::from_secs(60);
const ERROR_SNIPPET_CHARS: usize = 100;

/// Wire body for one generation call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: String,
    pub size: String,
    pub num_inference_steps: u32,
    pub seed: i64,
}

/// One generated image plus the seed that produced it. `seed` is the
/// API-echoed value when the response carries one, else the seed that was
/// sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
    pub seed: i64,
}

#[derive(Clone)]
pub struct ImageGenerationClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ImageGenerationClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .expect("reqwest client build should not fail");

        Self {
            http,
            base_url: "https://api.siliconflow.cn".to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    fn generations_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.ends_with(GENERATIONS_PATH) {
            base.to_string()
        } else {
            format!("{base}{GENERATIONS_PATH}")
        }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedImage> {
        tracing::debug!(
            model = %request.model,
            seed = request.seed,
            "dispatching image generation request"
        );

        let response = self
            .http
            .post(self.generations_url())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        classify_response(status, &body, request.seed)
    }
}

/// First match wins: non-JSON body, then non-200 status, then missing image
/// data, then success.
fn classify_response(
    status: reqwest::StatusCode,
    body: &str,
    sent_seed: i64,
) -> Result<GeneratedImage> {
    let Ok(parsed) = serde_json::from_str::<Value>(body) else {
        return Err(QwenImageError::InvalidResponse(
            snippet(body, ERROR_SNIPPET_CHARS).to_string(),
        ));
    };

    if status != reqwest::StatusCode::OK {
        let message = parsed
            .get("error")
            .and_then(|err| err.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| parsed.to_string());
        return Err(QwenImageError::Api { status, message });
    }

    let url = parsed
        .get("images")
        .and_then(Value::as_array)
        .and_then(|images| images.first())
        .and_then(|image| image.get("url"))
        .and_then(Value::as_str);
    let Some(url) = url else {
        return Err(QwenImageError::MalformedResponse(
            snippet(&parsed.to_string(), ERROR_SNIPPET_CHARS).to_string(),
        ));
    };

    let seed = parsed
        .get("seed")
        .and_then(Value::as_i64)
        .unwrap_or(sent_seed);

    Ok(GeneratedImage {
        url: url.to_string(),
        seed,
    })
}

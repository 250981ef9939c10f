//! OpenAI-compatible `/v1/completions` backend for the normalization gateway.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use serenity::async_trait;
use tracing::{debug, error, info};

use super::normalizer::{GatewayError, GatewayResult, Normalizer, NormalizerSettings};

/// Request body for the legacy completions endpoint.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

/// Normalizes chat input with an OpenAI-compatible completion model.
pub struct OpenAiNormalizer {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    settings: NormalizerSettings,
}

impl OpenAiNormalizer {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl AsRef<str>,
        model: impl Into<String>,
        settings: NormalizerSettings,
    ) -> Self {
        let endpoint = format!("{}/v1/completions", base_url.as_ref().trim_end_matches('/'));
        let model = model.into();
        debug!("Creating OpenAI normalizer for {} using '{}'", endpoint, model);
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint,
            model,
            settings,
        }
    }

    /// Pulls the completion text out of a response body, or the provider's
    /// error message if there is one.
    fn extract_text(result: &Value) -> GatewayResult<String> {
        match &result["choices"][0]["text"] {
            Value::String(text) => Ok(text.trim().to_string()),
            _ => match &result["error"]["message"] {
                Value::String(message) => Err(GatewayError::Provider(message.to_owned())),
                _ => Err(GatewayError::MalformedResponse(
                    "response has no completion text".to_string(),
                )),
            },
        }
    }
}

#[async_trait]
impl Normalizer for OpenAiNormalizer {
    async fn normalize(&self, prompt: &str) -> GatewayResult<String> {
        info!("Sending completion request to '{}'", self.model);
        let body = CompletionRequest {
            model: &self.model,
            prompt,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| error!("Completion request failed: {}", e))?;

        let status = response.status();
        let text = response.text().await?;

        let result: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) if !status.is_success() => {
                error!("Completion endpoint returned {}", status);
                return Err(GatewayError::Provider(format!("{status}: {text}")));
            }
            Err(e) => return Err(GatewayError::MalformedResponse(e.to_string())),
        };

        Self::extract_text(&result).inspect_err(|e| error!("Completion failed: {}", e))
    }
}

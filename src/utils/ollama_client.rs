use ollama_rs::Ollama;
use ollama_rs::generation::completion::request::GenerationRequest;
use ollama_rs::models::ModelOptions;
use serenity::async_trait;
use tracing::{debug, error, info};

use super::normalizer::{GatewayResult, Normalizer, NormalizerSettings};

/// Normalizes chat input with a local Ollama completion model.
pub struct OllamaNormalizer {
    client: Ollama,
    model: String,
    settings: NormalizerSettings,
}

impl OllamaNormalizer {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        model: impl Into<String>,
        settings: NormalizerSettings,
    ) -> Self {
        let host = host.into();
        let model = model.into();
        debug!("Creating Ollama normalizer for {}:{} using '{}'", host, port, model);
        Self {
            client: Ollama::new(host, port),
            model,
            settings,
        }
    }

    fn options(&self) -> ModelOptions {
        ModelOptions::default()
            .temperature(self.settings.temperature)
            .num_predict(i32::try_from(self.settings.max_tokens).unwrap_or(i32::MAX))
    }
}

#[async_trait]
impl Normalizer for OllamaNormalizer {
    async fn normalize(&self, prompt: &str) -> GatewayResult<String> {
        info!("Sending completion request to Ollama model '{}'", self.model);
        let request =
            GenerationRequest::new(self.model.clone(), prompt.to_string()).options(self.options());

        match self.client.generate(request).await {
            Ok(response) => {
                debug!("Received {} bytes from Ollama", response.response.len());
                Ok(response.response.trim().to_string())
            }
            Err(e) => {
                error!("Failed to get completion from Ollama: {}", e);
                Err(e.into())
            }
        }
    }
}

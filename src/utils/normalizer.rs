//! The normalization gateway: a text-completion model that turns free-form chat
//! input into a canonical movie record or search query.

use ollama_rs::error::OllamaError;
use serenity::async_trait;
use thiserror::Error;

use super::ollama_client::OllamaNormalizer;
use super::openai::OpenAiNormalizer;

/// Why a normalization request failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never got a response (connection, TLS, timeout).
    #[error("Model request failed: {0}")]
    Network(String),

    /// The provider answered with an error.
    #[error("Model provider error: {0}")]
    Provider(String),

    /// The provider answered with something we could not read.
    #[error("Unexpected model response: {0}")]
    MalformedResponse(String),
}

/// Result type for gateway calls.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<OllamaError> for GatewayError {
    fn from(e: OllamaError) -> Self {
        match e {
            OllamaError::ReqwestError(e) => GatewayError::from(e),
            OllamaError::JsonError(e) => GatewayError::MalformedResponse(e.to_string()),
            other => GatewayError::Provider(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GatewayError::MalformedResponse(e.to_string())
        } else {
            GatewayError::Network(e.to_string())
        }
    }
}

/// Generation bounds shared by every backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizerSettings {
    /// Maximum number of tokens the model may produce.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for NormalizerSettings {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            temperature: 0.5,
        }
    }
}

/// A text-completion model used to normalize chat input.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Normalizer: Send + Sync {
    /// Sends `prompt` to the model and returns its completion, trimmed.
    async fn normalize(&self, prompt: &str) -> GatewayResult<String>;
}

/// Which completion provider to talk to, with its connection details.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizerBackend {
    Ollama {
        host: String,
        port: u16,
        model: String,
    },
    OpenAi {
        api_key: String,
        base_url: String,
        model: String,
    },
}

impl NormalizerBackend {
    /// Builds the client for this backend.
    pub fn build(self, settings: NormalizerSettings) -> Box<dyn Normalizer> {
        match self {
            NormalizerBackend::Ollama { host, port, model } => {
                Box::new(OllamaNormalizer::new(host, port, model, settings))
            }
            NormalizerBackend::OpenAi {
                api_key,
                base_url,
                model,
            } => Box::new(OpenAiNormalizer::new(api_key, base_url, model, settings)),
        }
    }
}

//! Runtime configuration read from the environment (after `.env` is loaded).

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::utils::movie_log::DEFAULT_MOVIE_LOG;
use crate::utils::normalizer::{NormalizerBackend, NormalizerSettings};

const DEFAULT_OLLAMA_HOST: &str = "http://localhost";
const DEFAULT_OLLAMA_PORT: u16 = 11434;
const DEFAULT_OLLAMA_MODEL: &str = "llama3";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Errors raised while reading the configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// The guild and channel where unrecognized messages go straight to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugTarget {
    pub guild_id: u64,
    pub channel_id: u64,
}

/// Everything the bot needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub discord_token: String,
    pub movie_log_path: PathBuf,
    pub backend: NormalizerBackend,
    pub settings: NormalizerSettings,
    pub debug_target: Option<DebugTarget>,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Treat empty values like unset ones.
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let discord_token = get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let movie_log_path = get("MOVIE_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MOVIE_LOG));

        let backend = match get("NORMALIZER_BACKEND")
            .map(|b| b.to_lowercase())
            .as_deref()
        {
            None | Some("ollama") => {
                let host = get("OLLAMA_HOST").unwrap_or_else(|| DEFAULT_OLLAMA_HOST.to_string());
                check_url("OLLAMA_HOST", &host)?;
                let port = parse_or("OLLAMA_PORT", get("OLLAMA_PORT"), DEFAULT_OLLAMA_PORT)?;
                let model = get("DEFAULT_OLLAMA_MODEL").unwrap_or_else(|| {
                    warn!(
                        "DEFAULT_OLLAMA_MODEL environment variable not set. Using '{}'.",
                        DEFAULT_OLLAMA_MODEL
                    );
                    DEFAULT_OLLAMA_MODEL.to_string()
                });
                NormalizerBackend::Ollama { host, port, model }
            }
            Some("openai") => {
                let api_key = get("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;
                let base_url =
                    get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
                check_url("OPENAI_BASE_URL", &base_url)?;
                let model = get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());
                NormalizerBackend::OpenAi {
                    api_key,
                    base_url,
                    model,
                }
            }
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "NORMALIZER_BACKEND",
                    reason: format!("unknown backend '{other}', expected 'ollama' or 'openai'"),
                });
            }
        };

        let defaults = NormalizerSettings::default();
        let settings = NormalizerSettings {
            max_tokens: parse_or(
                "NORMALIZER_MAX_TOKENS",
                get("NORMALIZER_MAX_TOKENS"),
                defaults.max_tokens,
            )?,
            temperature: parse_or(
                "NORMALIZER_TEMPERATURE",
                get("NORMALIZER_TEMPERATURE"),
                defaults.temperature,
            )?,
        };

        let debug_target = match (get("DEBUG_GUILD"), get("DEBUG_CHANNEL")) {
            (Some(guild), Some(channel)) => Some(DebugTarget {
                guild_id: parse_or("DEBUG_GUILD", Some(guild), 0)?,
                channel_id: parse_or("DEBUG_CHANNEL", Some(channel), 0)?,
            }),
            (None, None) => None,
            _ => {
                warn!("Only one of DEBUG_GUILD and DEBUG_CHANNEL is set; debug passthrough disabled");
                None
            }
        };

        debug!(
            "Loaded configuration: log at {}, backend {}",
            movie_log_path.display(),
            backend_name(&backend)
        );

        Ok(Self {
            discord_token,
            movie_log_path,
            backend,
            settings,
            debug_target,
        })
    }
}

fn backend_name(backend: &NormalizerBackend) -> &'static str {
    match backend {
        NormalizerBackend::Ollama { .. } => "ollama",
        NormalizerBackend::OpenAi { .. } => "openai",
    }
}

fn parse_or<T>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: format!("'{raw}': {e}"),
        }),
    }
}

fn check_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::Invalid {
            name,
            reason: format!("'{value}': {e}"),
        })
}

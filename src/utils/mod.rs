//! This module aggregates the storage and model-client utilities used by the bot.

/// Flat-file storage for movie records.
pub mod movie_log;
/// The `Normalizer` trait, its error type and backend selection.
pub mod normalizer;
/// Normalizer backed by an Ollama server.
pub mod ollama_client;
/// Normalizer backed by an OpenAI-compatible completions endpoint.
pub mod openai;

//! The movie log bot: turns a chat message into a store operation and a reply.
//!
//! Each command lives in its own submodule as an `impl MovieLogBot` block.

/// Submodule handling `/add`.
mod add;
/// Submodule handling unrecognized messages in the debug channel.
mod chat;
/// Prefix parsing for incoming messages.
pub mod command;
/// Submodule handling `/delete`.
mod delete;
/// Submodule handling `/list`.
mod list;
/// Submodule handling `/search`.
mod search;

pub use command::Command;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::report_error;
use crate::utils::movie_log::MovieLog;
use crate::utils::normalizer::Normalizer;

/// Handles movie log commands one message at a time.
pub struct MovieLogBot {
    store: MovieLog,
    normalizer: Box<dyn Normalizer>,
    // Held for the whole of a command so messages complete in order.
    in_flight: Mutex<()>,
}

impl MovieLogBot {
    pub fn new(store: MovieLog, normalizer: Box<dyn Normalizer>) -> Self {
        Self {
            store,
            normalizer,
            in_flight: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &MovieLog {
        &self.store
    }

    /// Runs a chat message through the bot.
    ///
    /// Returns the reply to post, or `None` when the message is not a movie
    /// log command.
    pub async fn handle(&self, text: &str) -> Option<String> {
        let command = Command::parse(text)?;
        let _guard = self.in_flight.lock().await;

        info!("Handling {} command", command.word());
        let reply = match command {
            Command::Add(_) => self.add(&command).await,
            Command::List => self.list().await,
            Command::Search(_) => self.search(&command).await,
            Command::Delete(_) => self.delete(&command).await,
        };
        debug!("Reply for {}: {} bytes", command.word(), reply.len());
        Some(reply)
    }

    /// Asks the gateway for the canonical form of a command's argument.
    ///
    /// Only the first non-blank line of the completion is kept, since a
    /// record is a single line. On failure the error is already formatted
    /// for the channel and the caller must stop without touching the store.
    async fn normalize(&self, command: &Command<'_>) -> Result<String, String> {
        self.normalizer
            .normalize(&command.prompt())
            .await
            .map(|text| first_line(&text).to_string())
            .map_err(|e| {
                warn!("Normalization failed for {}: {}", command.word(), e);
                report_error(&e)
            })
    }
}

/// The first non-blank line of `text`, trimmed, or `""` if there is none.
fn first_line(text: &str) -> &str {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

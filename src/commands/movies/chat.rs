use tracing::{debug, warn};

use super::{MovieLogBot, report_error};

impl MovieLogBot {
    /// Sends a message that is not a command straight to the model and
    /// returns its completion. Only used for the configured debug channel.
    ///
    /// Returns `None` when the model answers with nothing, since an empty
    /// message cannot be posted.
    pub async fn chat(&self, text: &str) -> Option<String> {
        let _guard = self.in_flight.lock().await;

        match self.normalizer.normalize(text).await {
            Ok(reply) if reply.trim().is_empty() => {
                debug!("Model returned an empty completion");
                None
            }
            Ok(reply) => Some(reply.trim().to_string()),
            Err(e) => {
                warn!("Debug passthrough failed: {}", e);
                Some(report_error(&e))
            }
        }
    }
}

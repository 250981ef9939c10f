use tracing::error;

use super::{MovieLogBot, report_error};
use crate::utils::movie_log::StoreError;

impl MovieLogBot {
    /// `/list`: every record in file order. Never calls the gateway.
    pub(super) async fn list(&self) -> String {
        let body = match self.store.list().await {
            Ok(records) => records.join("\n"),
            Err(e @ StoreError::Missing { .. }) => e.to_string(),
            Err(e) => {
                error!("Failed to list movies: {}", e);
                return report_error(&e);
            }
        };
        format!("Movies:\n{body}")
    }
}

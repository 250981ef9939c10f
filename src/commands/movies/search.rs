use tracing::error;

use super::{Command, MovieLogBot, report_error};
use crate::utils::movie_log::{SearchOutcome, StoreError};

impl MovieLogBot {
    /// `/search`: normalize the query, then match it case-insensitively.
    pub(super) async fn search(&self, command: &Command<'_>) -> String {
        let query = match self.normalize(command).await {
            Ok(query) => query,
            Err(reply) => return reply,
        };

        let body = match self.store.search(&query).await {
            Ok(SearchOutcome::Matches(records)) => records.join("\n"),
            Ok(SearchOutcome::NoResults) => "No results found".to_string(),
            Err(e @ StoreError::Missing { .. }) => e.to_string(),
            Err(e) => {
                error!("Failed to search for '{}': {}", query, e);
                return report_error(&e);
            }
        };
        format!("Search results:\n{body}")
    }
}

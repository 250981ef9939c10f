use tracing::{error, info};

use super::{Command, MovieLogBot, report_error};
use crate::utils::movie_log::{DeleteOutcome, StoreError};

impl MovieLogBot {
    /// `/delete`: normalize the argument and remove every exactly matching line.
    pub(super) async fn delete(&self, command: &Command<'_>) -> String {
        let movie = match self.normalize(command).await {
            Ok(movie) => movie,
            Err(reply) => return reply,
        };

        match self.store.delete(&movie).await {
            Ok(DeleteOutcome::Deleted { removed }) => {
                info!("Removed {} entries of '{}'", removed, movie);
                format!("Movie deleted: {movie}")
            }
            Ok(DeleteOutcome::RecordNotFound) => "Movie not found".to_string(),
            Err(e @ StoreError::Missing { .. }) => e.to_string(),
            Err(e) => {
                error!("Failed to delete '{}': {}", movie, e);
                report_error(&e)
            }
        }
    }
}

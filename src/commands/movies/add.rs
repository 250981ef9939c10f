use tracing::{error, info};

use super::{Command, MovieLogBot, report_error};
use crate::utils::movie_log::AddOutcome;

impl MovieLogBot {
    /// `/add`: normalize the argument and append it to the log.
    pub(super) async fn add(&self, command: &Command<'_>) -> String {
        let movie = match self.normalize(command).await {
            Ok(movie) => movie,
            Err(reply) => return reply,
        };

        match self.store.add(&movie).await {
            Ok(AddOutcome::Added) => {
                info!("Logged '{}'", movie);
                format!("Movie added: {movie}")
            }
            Ok(AddOutcome::SkippedDuplicate) => format!("Movie already logged: {movie}"),
            Ok(AddOutcome::SkippedBlank) => "No movie found to add".to_string(),
            Ok(AddOutcome::SkippedMultiline) => "Movie must fit on one line".to_string(),
            Err(e) => {
                error!("Failed to add '{}': {}", movie, e);
                report_error(&e)
            }
        }
    }
}

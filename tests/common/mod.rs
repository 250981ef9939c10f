//! Common test utilities, fixtures, and mocks
//! Shared by the integration tests in this directory.

pub mod fixtures;
pub mod mocks;

use std::sync::Once;

use movielog::MovieLogBot;
use movielog::utils::movie_log::{DEFAULT_MOVIE_LOG, MovieLog};
use movielog::utils::normalizer::Normalizer;
use tempfile::TempDir;
use tracing::Level;

static INIT: Once = Once::new();

/// Initialize tracing for tests
pub fn init() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .init();
    });
}

/// Creates a bot over a movie log in a fresh temp dir. Keep the dir alive
/// for as long as the bot is used.
pub fn temp_bot(normalizer: impl Normalizer + 'static) -> (TempDir, MovieLogBot) {
    init();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = MovieLog::new(dir.path().join(DEFAULT_MOVIE_LOG));
    (dir, MovieLogBot::new(store, Box::new(normalizer)))
}

/// Writes `records` to the bot's log, one per line.
pub async fn seed(bot: &MovieLogBot, records: &[&str]) {
    let contents: String = records.iter().map(|r| format!("{r}\n")).collect();
    tokio::fs::write(bot.store().path(), contents)
        .await
        .expect("Failed to seed movie log");
}

/// Reads the bot's log back as raw text.
pub async fn raw(bot: &MovieLogBot) -> String {
    tokio::fs::read_to_string(bot.store().path())
        .await
        .expect("Failed to read movie log")
}

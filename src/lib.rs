//! A Discord bot that keeps a movie watch-log in a plain text file.
//!
//! Messages starting with `/add`, `/list`, `/search` or `/delete` are run
//! through a text-completion model that cleans up the free-form argument,
//! then applied to the log.

pub mod commands;
pub mod config;
pub mod events;
pub mod utils;

pub use commands::movies::MovieLogBot;
pub use config::Config;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
pub type CommandResult = Result<(), Error>;

/// User data, which is stored and accessible in all command invocations and events.
pub struct Data {
    pub bot: MovieLogBot,
    pub debug_target: Option<config::DebugTarget>,
}

use poise::serenity_prelude as serenity;
use serenity::{ChannelId, Message};
use tracing::{debug, error};

use crate::config::DebugTarget;
use crate::{Data, Error};

/// The maximum character length allowed for a single Discord message.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Poise event hook: feeds every incoming message to the movie log bot.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        on_message(ctx, new_message, data).await;
    }
    Ok(())
}

/// How an incoming message is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Bot authors are never answered.
    Ignore,
    /// Only movie log commands get a reply.
    Commands,
    /// Movie log commands, with anything else passed to the model.
    CommandsThenChat,
}

/// Decides how a message is handled from its author flag and location.
///
/// Direct messages have no guild and never reach the debug channel.
pub fn route(
    author_is_bot: bool,
    guild_id: Option<u64>,
    channel_id: u64,
    debug_target: Option<DebugTarget>,
) -> Route {
    if author_is_bot {
        return Route::Ignore;
    }
    match debug_target {
        Some(target) if guild_id == Some(target.guild_id) && channel_id == target.channel_id => {
            Route::CommandsThenChat
        }
        _ => Route::Commands,
    }
}

async fn on_message(ctx: &serenity::Context, message: &Message, data: &Data) {
    let route = route(
        message.author.bot,
        message.guild_id.map(|id| id.get()),
        message.channel_id.get(),
        data.debug_target,
    );
    if route == Route::Ignore {
        return;
    }

    let reply = match data.bot.handle(&message.content).await {
        Some(reply) => Some(reply),
        None if route == Route::CommandsThenChat => {
            debug!("Passing debug channel message to the model");
            data.bot.chat(&message.content).await
        }
        None => None,
    };

    if let Some(reply) = reply {
        if let Err(e) = send_chunked(ctx, message.channel_id, &reply).await {
            error!("Failed to send reply to {}: {}", message.channel_id, e);
        }
    }
}

/// Sends a potentially long reply in chunks that respect Discord's message
/// length limit.
async fn send_chunked(
    ctx: &serenity::Context,
    channel_id: ChannelId,
    reply: &str,
) -> Result<(), Error> {
    for chunk in split_message(reply, MAX_MESSAGE_LENGTH) {
        channel_id.say(ctx, chunk).await?;
    }
    Ok(())
}

/// Splits `text` into pieces of at most `max_chars` characters, never
/// cutting a character in half. A limit of zero is treated as one.
pub fn split_message(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut iter = text.chars();
    let mut pos = 0;
    while pos < text.len() {
        let mut len = 0;
        for ch in iter.by_ref().take(max_chars) {
            len += ch.len_utf8();
        }
        chunks.push(&text[pos..pos + len]);
        pos += len;
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const TARGET: DebugTarget = DebugTarget {
        guild_id: 10,
        channel_id: 20,
    };

    #[test_case(false, Some(10), 20, Some(TARGET), Route::CommandsThenChat ; "debug channel")]
    #[test_case(false, Some(11), 20, Some(TARGET), Route::Commands ; "other guild same channel id")]
    #[test_case(false, Some(10), 21, Some(TARGET), Route::Commands ; "other channel in debug guild")]
    #[test_case(false, None, 20, Some(TARGET), Route::Commands ; "direct message")]
    #[test_case(false, Some(10), 20, None, Route::Commands ; "no debug channel configured")]
    #[test_case(true, Some(10), 20, Some(TARGET), Route::Ignore ; "bot in debug channel")]
    #[test_case(true, Some(11), 21, None, Route::Ignore ; "bot elsewhere")]
    fn test_route(
        author_is_bot: bool,
        guild_id: Option<u64>,
        channel_id: u64,
        target: Option<DebugTarget>,
        expected: Route,
    ) {
        assert_eq!(route(author_is_bot, guild_id, channel_id, target), expected);
    }

    #[test]
    fn test_short_message_is_one_chunk() {
        assert_eq!(split_message("Movies:\nUp (2009)", 2000), vec!["Movies:\nUp (2009)"]);
    }

    #[test]
    fn test_empty_message_has_no_chunks() {
        assert!(split_message("", 2000).is_empty());
    }

    #[test]
    fn test_long_message_is_split_at_limit() {
        let text = "a".repeat(4500);

        let chunks = split_message(&text, MAX_MESSAGE_LENGTH);

        assert_eq!(
            chunks.iter().map(|c| c.len()).collect::<Vec<_>>(),
            vec![2000, 2000, 500]
        );
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_split_counts_characters_not_bytes() {
        let chunks = split_message("ééé", 2);
        assert_eq!(chunks, vec!["éé", "é"]);
    }

    #[test]
    fn test_zero_limit_splits_per_character() {
        assert_eq!(split_message("Up!", 0), vec!["U", "p", "!"]);
    }
}

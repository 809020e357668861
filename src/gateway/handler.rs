//! Serenity event handler
//!
//! Converts gateway events into engine calls. Each message event runs in its
//! own task, so a slow command only delays its own reply.

use chrono::{DateTime, Utc};
use log::{debug, error, info};
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::event::ResumedEvent;
use serenity::model::gateway::{Activity, Ready};
use serenity::prelude::*;
use std::sync::Arc;

use super::responder::ChannelResponder;
use crate::command_handler::CommandHandler;
use crate::commands::context::IncomingMessage;
use crate::core::MessageCatalog;

pub struct Handler {
    command_handler: Arc<CommandHandler>,
    catalog: Arc<MessageCatalog>,
}

impl Handler {
    pub fn new(command_handler: CommandHandler, catalog: Arc<MessageCatalog>) -> Self {
        Handler {
            command_handler: Arc::new(command_handler),
            catalog,
        }
    }

    /// Convert a Serenity message, resolving the author's voice channel from the cache
    fn to_incoming(ctx: &Context, msg: &Message) -> IncomingMessage {
        let voice_channel_id = msg.guild_id.and_then(|guild_id| {
            ctx.cache
                .guild_field(guild_id, |guild| {
                    guild
                        .voice_states
                        .get(&msg.author.id)
                        .and_then(|state| state.channel_id)
                })
                .flatten()
        });

        let sent_at = DateTime::parse_from_rfc3339(&msg.timestamp.to_string())
            .map(|t| t.with_timezone(&Utc))
            .ok()
            .or_else(|| DateTime::from_timestamp(msg.timestamp.unix_timestamp(), 0))
            .unwrap_or_else(Utc::now);

        IncomingMessage {
            content: msg.content.clone(),
            author_id: msg.author.id.0,
            author_is_bot: msg.author.bot,
            channel_id: msg.channel_id.0,
            guild_id: msg.guild_id.map(|g| g.0),
            voice_channel_id: voice_channel_id.map(|c| c.0),
            sent_at,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        let incoming = Self::to_incoming(&ctx, &msg);
        let responder = ChannelResponder::for_message(ctx.http.clone(), &msg);
        let outcome = self
            .command_handler
            .handle_message(&incoming, &responder)
            .await;
        debug!("Message {} handled: {outcome:?}", msg.id);
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());

        let dispatcher = self.command_handler.dispatcher();
        if let Err(e) = dispatcher.bind_bot_user(ready.user.id.0, &ready.user.name) {
            error!("❌ Failed to build command trigger for bot user: {e}");
        }

        let presence = self
            .catalog
            .format("presence.listening", &[("prefix", dispatcher.prefix())]);
        ctx.set_activity(Activity::listening(presence)).await;
        info!(
            "✅ {} commands ready with prefix `{}`",
            dispatcher.registry().len(),
            dispatcher.prefix()
        );
    }

    async fn resume(&self, _ctx: Context, _resumed: ResumedEvent) {
        info!("🔄 Gateway session resumed");
    }
}

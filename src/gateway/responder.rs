//! Discord channel replies

use anyhow::Result;
use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::channel::Message;
use serenity::model::id::{ChannelId, MessageId};
use std::sync::Arc;

use crate::commands::context::Responder;

/// Replies into the channel of one inbound message
pub struct ChannelResponder {
    http: Arc<Http>,
    channel_id: ChannelId,
    message_id: MessageId,
}

impl ChannelResponder {
    pub fn for_message(http: Arc<Http>, msg: &Message) -> Self {
        Self {
            http,
            channel_id: msg.channel_id,
            message_id: msg.id,
        }
    }
}

#[async_trait]
impl Responder for ChannelResponder {
    async fn reply(&self, text: &str) -> Result<()> {
        self.channel_id
            .send_message(&self.http, |m| {
                m.content(text)
                    .reference_message((self.channel_id, self.message_id))
            })
            .await?;
        Ok(())
    }

    async fn send(&self, text: &str) -> Result<()> {
        self.channel_id.say(&self.http, text).await?;
        Ok(())
    }
}

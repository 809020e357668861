//! Per-dispatch context handed to commands
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Borrowed per-message context with a platform-neutral reply capability
//! - 1.0.0: Initial implementation with core shared state

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::registry::CommandRegistry;
use crate::core::MessageCatalog;

/// An inbound text message with the identity details the engine needs
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub content: String,
    pub author_id: u64,
    pub author_is_bot: bool,
    pub channel_id: u64,
    pub guild_id: Option<u64>,
    /// Voice channel the author currently occupies, if any
    pub voice_channel_id: Option<u64>,
    pub sent_at: DateTime<Utc>,
}

impl IncomingMessage {
    pub fn in_voice_channel(&self) -> bool {
        self.voice_channel_id.is_some()
    }
}

/// Reply capability for the channel a message arrived in
#[async_trait]
pub trait Responder: Send + Sync {
    /// Reply to the originating message
    async fn reply(&self, text: &str) -> Result<()>;

    /// Post to the originating channel without referencing the message
    async fn send(&self, text: &str) -> Result<()>;
}

/// Everything a command may look at while it runs
///
/// Lives for a single dispatch and is never retained by the engine.
pub struct CommandContext<'a> {
    pub request_id: Uuid,
    pub message: &'a IncomingMessage,
    pub responder: &'a dyn Responder,
    pub registry: &'a CommandRegistry,
    pub catalog: &'a MessageCatalog,
    pub prefix: &'a str,
    pub bot_name: &'a str,
}

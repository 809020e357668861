//! Top-level handling for every inbound chat message
//!
//! Bot authors are ignored, then the voice gate applies, then fixed activity
//! triggers get the first look before the prefix dispatcher.

use log::debug;

use crate::commands::context::{IncomingMessage, Responder};
use crate::commands::dispatcher::{DispatchOutcome, Dispatcher};
use crate::features::activities::{FixedTriggerRouter, RouteOutcome};

/// What the handler did with a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    Ignored,
    Routed(RouteOutcome),
    Dispatched(DispatchOutcome),
}

pub struct CommandHandler {
    router: FixedTriggerRouter,
    dispatcher: Dispatcher,
    require_voice_channel: bool,
}

impl CommandHandler {
    pub fn new(router: FixedTriggerRouter, dispatcher: Dispatcher, require_voice_channel: bool) -> Self {
        Self {
            router,
            dispatcher,
            require_voice_channel,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub async fn handle_message(
        &self,
        message: &IncomingMessage,
        responder: &dyn Responder,
    ) -> MessageOutcome {
        if message.author_is_bot {
            return MessageOutcome::Ignored;
        }
        if self.require_voice_channel && !message.in_voice_channel() {
            debug!(
                "Message from user {} ignored: not in a voice channel",
                message.author_id
            );
            return MessageOutcome::Ignored;
        }

        match self.router.route(message, responder).await {
            RouteOutcome::NotMatched => {}
            routed => return MessageOutcome::Routed(routed),
        }

        MessageOutcome::Dispatched(self.dispatcher.dispatch(message, responder).await)
    }
}

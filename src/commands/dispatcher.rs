//! Prefix command dispatcher
//!
//! Tokenize → resolve → cooldown → execute, with every command failure
//! contained at this boundary.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use futures::FutureExt;
use log::{debug, error, info, warn};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use uuid::Uuid;

use super::context::{CommandContext, IncomingMessage, Responder};
use super::registry::CommandRegistry;
use super::tokenizer::TriggerTokenizer;
use crate::core::MessageCatalog;
use crate::features::cooldowns::{format_remaining, CooldownDecision, CooldownManager};

/// What happened to a message handed to the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Message did not start with the prefix or a bot mention
    NoMatch,
    UnknownCommand,
    CooldownDenied { command: String, remaining: Duration },
    Executed { command: String },
    HandlerFailed { command: String },
}

/// Identity learned from the gateway once the bot is ready
struct BotIdentity {
    name: String,
    tokenizer: TriggerTokenizer,
}

pub struct Dispatcher {
    registry: CommandRegistry,
    cooldowns: Arc<CooldownManager>,
    catalog: Arc<MessageCatalog>,
    prefix: String,
    identity: OnceLock<BotIdentity>,
}

impl Dispatcher {
    pub fn new(
        registry: CommandRegistry,
        cooldowns: Arc<CooldownManager>,
        catalog: Arc<MessageCatalog>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            cooldowns,
            catalog,
            prefix: prefix.into(),
            identity: OnceLock::new(),
        }
    }

    /// Bind the bot's own user so mentions are recognised
    ///
    /// Only the first call has an effect; reconnects report the same user.
    pub fn bind_bot_user(&self, bot_id: u64, bot_name: &str) -> Result<(), regex::Error> {
        if self.identity.get().is_some() {
            return Ok(());
        }
        let tokenizer = TriggerTokenizer::new(bot_id, &self.prefix)?;
        let _ = self.identity.set(BotIdentity {
            name: bot_name.to_string(),
            tokenizer,
        });
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        self.identity.get().is_some()
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub async fn dispatch(
        &self,
        message: &IncomingMessage,
        responder: &dyn Responder,
    ) -> DispatchOutcome {
        let Some(identity) = self.identity.get() else {
            debug!("Bot user not bound yet, ignoring message");
            return DispatchOutcome::NoMatch;
        };
        let Some(invocation) = identity.tokenizer.tokenize(&message.content) else {
            return DispatchOutcome::NoMatch;
        };
        let Some(command) = self.registry.resolve(&invocation.command_name) else {
            debug!("Unknown command `{}` ignored", invocation.command_name);
            return DispatchOutcome::UnknownCommand;
        };

        let request_id = Uuid::new_v4();
        let name = command.name();
        info!(
            "[{request_id}] 🎯 Command `{name}` from user {} | Args: {:?}",
            message.author_id, invocation.args
        );

        // Check and start the window before the first await
        if let CooldownDecision::Denied { remaining } =
            self.cooldowns
                .check(name, message.author_id, command.cooldown())
        {
            debug!(
                "[{request_id}] ⏳ User {} on cooldown for `{name}` ({:?} left)",
                message.author_id, remaining
            );
            let time = format_remaining(remaining);
            let notice = self
                .catalog
                .format("common.cooldownMessage", &[("time", time.as_str()), ("name", name)]);
            if let Err(e) = responder.reply(&notice).await {
                warn!("[{request_id}] Failed to send cooldown notice: {e}");
            }
            return DispatchOutcome::CooldownDenied {
                command: name.to_string(),
                remaining,
            };
        }

        let ctx = CommandContext {
            request_id,
            message,
            responder,
            registry: &self.registry,
            catalog: &self.catalog,
            prefix: &self.prefix,
            bot_name: &identity.name,
        };

        let result = AssertUnwindSafe(command.execute(&ctx, &invocation.args))
            .catch_unwind()
            .await;

        let failure = match result {
            Ok(Ok(())) => {
                info!("[{request_id}] ✅ Command `{name}` completed");
                return DispatchOutcome::Executed {
                    command: name.to_string(),
                };
            }
            Ok(Err(e)) => format!("{e:?}"),
            Err(panic) => format!("panicked: {}", panic_message(&*panic)),
        };

        error!("[{request_id}] ❌ Command `{name}` failed: {failure}");
        if let Err(why) = responder.reply(&self.catalog.get("common.errorCommand")).await {
            error!("[{request_id}] Failed to send error message: {why}");
        }
        DispatchOutcome::HandlerFailed {
            command: name.to_string(),
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}

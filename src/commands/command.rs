//! Prefix command trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Replaces the slash handler trait with prefix commands carrying aliases and cooldowns

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use super::context::CommandContext;
use crate::core::MessageCatalog;

/// Cooldown applied when a command does not declare its own
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(1);

/// A named unit of behaviour invoked through the prefix or a bot mention
///
/// Commands are registered once at startup with a `CommandRegistry` and are
/// immutable afterwards. The registry validates the name, aliases and cooldown
/// before accepting a command.
///
/// # Example
///
/// ```ignore
/// pub struct PingCommand;
///
/// #[async_trait]
/// impl Command for PingCommand {
///     fn name(&self) -> &'static str {
///         "ping"
///     }
///
///     async fn execute(&self, ctx: &CommandContext<'_>, _args: &[String]) -> Result<()> {
///         ctx.responder.reply("Pong!").await
///     }
/// }
/// ```
#[async_trait]
pub trait Command: Send + Sync {
    /// Canonical name, lowercase and without whitespace
    fn name(&self) -> &'static str;

    /// Additional names resolving to this command
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Window during which the same user may not invoke this command again
    fn cooldown(&self) -> Duration {
        DEFAULT_COOLDOWN
    }

    /// Localized one-line description for the help listing
    fn description(&self, _catalog: &MessageCatalog) -> String {
        String::new()
    }

    /// Run the command
    ///
    /// Errors and panics are contained by the dispatcher, which logs them and
    /// sends the author a generic failure reply.
    async fn execute(&self, ctx: &CommandContext<'_>, args: &[String]) -> Result<()>;
}

//! ping command

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

use crate::commands::command::Command;
use crate::commands::context::CommandContext;
use crate::core::MessageCatalog;

pub struct PingCommand;

#[async_trait]
impl Command for PingCommand {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn cooldown(&self) -> Duration {
        Duration::from_secs(10)
    }

    fn description(&self, catalog: &MessageCatalog) -> String {
        catalog.get("ping.description")
    }

    async fn execute(&self, ctx: &CommandContext<'_>, _args: &[String]) -> Result<()> {
        // Clock skew can put the message timestamp slightly in the future
        let latency = (Utc::now() - ctx.message.sent_at).num_milliseconds().max(0);
        let text = ctx
            .catalog
            .format("ping.result", &[("ping", latency.to_string().as_str())]);
        ctx.responder.reply(&text).await
    }
}

//! uptime command

use anyhow::Result;
use async_trait::async_trait;
use std::time::{Duration, Instant};

use crate::commands::command::Command;
use crate::commands::context::CommandContext;
use crate::core::MessageCatalog;

pub struct UptimeCommand {
    started_at: Instant,
}

impl UptimeCommand {
    pub fn new(started_at: Instant) -> Self {
        Self { started_at }
    }
}

#[async_trait]
impl Command for UptimeCommand {
    fn name(&self) -> &'static str {
        "uptime"
    }

    fn description(&self, catalog: &MessageCatalog) -> String {
        catalog.get("uptime.description")
    }

    async fn execute(&self, ctx: &CommandContext<'_>, _args: &[String]) -> Result<()> {
        let text = render(ctx.catalog, self.started_at.elapsed());
        ctx.responder.reply(&text).await
    }
}

fn render(catalog: &MessageCatalog, uptime: Duration) -> String {
    let total = uptime.as_secs();
    let days = (total / 86_400).to_string();
    let hours = (total / 3_600 % 24).to_string();
    let minutes = (total / 60 % 60).to_string();
    let seconds = (total % 60).to_string();

    catalog.format(
        "uptime.result",
        &[
            ("days", days.as_str()),
            ("hours", hours.as_str()),
            ("minutes", minutes.as_str()),
            ("seconds", seconds.as_str()),
        ],
    )
}

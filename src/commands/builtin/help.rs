//! help command
//!
//! Lists every registered command with its aliases and description.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use crate::commands::command::Command;
use crate::commands::context::CommandContext;
use crate::core::{split_message, MessageCatalog, MESSAGE_LIMIT};

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["h"]
    }

    fn description(&self, catalog: &MessageCatalog) -> String {
        catalog.get("help.description")
    }

    async fn execute(&self, ctx: &CommandContext<'_>, _args: &[String]) -> Result<()> {
        let text = render(ctx);
        let parts = split_message(&text, MESSAGE_LIMIT);
        debug!("[{}] Sending help in {} part(s)", ctx.request_id, parts.len());

        for part in parts {
            ctx.responder.send(&part).await?;
        }
        Ok(())
    }
}

fn render(ctx: &CommandContext<'_>) -> String {
    let catalog = ctx.catalog;
    let mut out = format!(
        "**{}**\n{}\n",
        catalog.format("help.title", &[("botname", ctx.bot_name)]),
        catalog.get("help.listHeader")
    );

    for command in ctx.registry.commands() {
        let aliases = ctx.registry.aliases_of(command.name());
        out.push_str(&format!("\n**{}{}**", ctx.prefix, command.name()));
        if !aliases.is_empty() {
            out.push_str(&format!(
                " ({}: {})",
                catalog.get("help.aliases"),
                aliases.join(", ")
            ));
        }
        let description = command.description(catalog);
        if !description.is_empty() {
            out.push_str(&format!(" - {description}"));
        }
    }
    out
}

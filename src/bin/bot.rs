use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use serenity::http::Http;
use serenity::prelude::*;
use std::sync::Arc;
use std::time::Instant;

use evobot::commands::builtin::create_all_commands;
use evobot::commands::{CommandHandler, CommandRegistry, Dispatcher};
use evobot::core::{Config, MessageCatalog};
use evobot::features::{CooldownManager, DiscordActivityInvites, FixedTriggerRouter};
use evobot::gateway::Handler;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let (config, source) = Config::load()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting EvoBot...");
    info!("📄 Configuration loaded from {source}");

    let catalog = Arc::new(MessageCatalog::load(&config.locales_dir, &config.locale)?);
    info!("🌐 Locale: {}", catalog.locale());

    info!("Now loading commands");
    // A duplicate command name leaves the registry ambiguous, refuse to start
    let registry = CommandRegistry::with_commands(create_all_commands(Instant::now()))?;

    let cooldowns = Arc::new(CooldownManager::new());
    cooldowns
        .clone()
        .spawn_sweeper(config.cooldown_sweep_interval());

    let dispatcher = Dispatcher::new(registry, cooldowns, catalog.clone(), config.prefix.clone());
    let invites = Arc::new(DiscordActivityInvites::new(Arc::new(Http::new(&config.discord_token))));
    let router = FixedTriggerRouter::new(invites, catalog.clone());
    let command_handler = CommandHandler::new(router, dispatcher, config.require_voice_channel);

    let handler = Handler::new(command_handler, catalog);

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Connecting to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}

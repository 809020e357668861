// Core layer - shared types and configuration
pub mod core;

// Features layer - cooldowns and voice activities
pub mod features;

// Application layer
pub mod command_handler;
pub mod commands;

// Gateway layer - serenity integration
pub mod gateway;

pub use core::{Config, MessageCatalog};

pub use features::{
    // Activities
    ActivityInviteService, DiscordActivityInvites, FixedTriggerRouter,
    // Cooldowns
    CooldownManager,
};

pub use command_handler::{CommandHandler, MessageOutcome};
pub use commands::{Command, CommandRegistry, Dispatcher};

//! # Command System
//!
//! Prefix (`!play`) and mention (`@bot play`) command handling.
//!
//! - **Version**: 3.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 3.0.0: Prefix commands with aliases, per-command cooldowns and contained failures
//! - 2.1.0: Add modular handler infrastructure (handler trait, context, registry)
//! - 1.0.0: Initial reorganization with modular command structure

pub mod builtin;
pub mod command;
pub mod context;
pub mod dispatcher;
pub mod registry;
pub mod tokenizer;

// Re-export the top-level message handler
pub use crate::command_handler::CommandHandler;

// Re-export command infrastructure
pub use command::{Command, DEFAULT_COOLDOWN};
pub use context::{CommandContext, IncomingMessage, Responder};
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use registry::CommandRegistry;
pub use tokenizer::{Invocation, TriggerTokenizer};

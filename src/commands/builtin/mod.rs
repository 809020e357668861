//! Built-in prefix commands
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: help, ping and uptime

pub mod help;
pub mod ping;
pub mod uptime;

use std::sync::Arc;
use std::time::Instant;

use super::command::Command;

/// Create all built-in commands
///
/// Returns a vector of commands ready to be registered with CommandRegistry.
pub fn create_all_commands(started_at: Instant) -> Vec<Arc<dyn Command>> {
    vec![
        Arc::new(help::HelpCommand),
        Arc::new(ping::PingCommand),
        Arc::new(uptime::UptimeCommand::new(started_at)),
    ]
}

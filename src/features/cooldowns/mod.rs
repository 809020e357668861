//! # Cooldowns Feature
//!
//! Per-command, per-user invocation windows for prefix commands.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod manager;

pub use manager::{format_remaining, CooldownDecision, CooldownManager};

//! # Features Layer
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.7.0
//!
//! ## Changelog
//! - 2.0.0: Cooldowns and voice activities
//! - 1.0.0: Initial feature module layout

pub mod activities;
pub mod cooldowns;

pub use activities::{
    ActivityInvite, ActivityInviteService, DiscordActivityInvites, FixedTriggerRouter,
    RouteOutcome,
};
pub use cooldowns::{CooldownDecision, CooldownManager};

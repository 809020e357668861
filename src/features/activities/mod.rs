//! # Activities Feature
//!
//! Voice channel activities (YouTube Together, poker, chess, ...) started by
//! fixed chat triggers.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod invite;
pub mod router;

pub use invite::{ActivityInvite, ActivityInviteService, DiscordActivityInvites, InviteEndpoint};
pub use router::{FixedTriggerRouter, RouteOutcome, FIXED_TRIGGERS};

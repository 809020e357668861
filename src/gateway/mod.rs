//! # Gateway Layer
//!
//! Serenity event handling and the Discord-backed reply capability.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod handler;
pub mod responder;

pub use handler::Handler;
pub use responder::ChannelResponder;

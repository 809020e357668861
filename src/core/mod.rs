//! # Core Module
//!
//! Configuration, error types, localization and reply formatting shared by
//! every other layer of the bot.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Add message catalog for localized replies
//! - 1.1.0: Add response module with message splitting
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod error;
pub mod i18n;
pub mod response;

// Re-export commonly used items
pub use config::{Config, ConfigSource};
pub use error::{ConfigError, RegistryError};
pub use i18n::MessageCatalog;
pub use response::{split_message, MESSAGE_LIMIT};

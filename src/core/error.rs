//! Startup error types
//!
//! Runtime failures inside commands travel as `anyhow::Error` and are contained
//! by the dispatcher. The errors here are the ones that must stop the process.

use thiserror::Error;

/// Errors raised while building the command registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command `{0}` is already registered")]
    DuplicateCommand(String),
    #[error("command `{name}` is malformed: {reason}")]
    MalformedCommand { name: String, reason: String },
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

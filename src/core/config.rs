//! Bot configuration
//!
//! Settings come from a YAML file when one exists, otherwise from environment
//! variables (a `.env` file is honoured through dotenvy).
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Add YAML config file support, voice gate and sweep interval
//! - 1.0.0: Environment-only configuration

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use super::error::ConfigError;

/// Locales the bot ships catalogs for (or can load from the locales directory)
pub const SUPPORTED_LOCALES: &[&str] = &[
    "ar", "de", "en", "es", "fr", "it", "ko", "nl", "pl", "pt_br", "ru", "sv", "tr", "zh_cn",
    "zh_tw",
];

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub discord_token: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_sweep_secs")]
    pub cooldown_sweep_secs: u64,
    /// Ignore every message whose author is not connected to a voice channel
    #[serde(default = "default_true")]
    pub require_voice_channel: bool,
}

fn default_prefix() -> String {
    "!".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_locales_dir() -> String {
    "locales".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sweep_secs() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    Environment,
}

impl ConfigSource {
    /// `CONFIG_PATH` (default `config.yaml`) if that file exists, else the environment
    pub fn detect() -> Self {
        Self::from_path(std::env::var("CONFIG_PATH").ok())
    }

    fn from_path(path: Option<String>) -> Self {
        let path = path.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        if Path::new(&path).exists() {
            ConfigSource::File(path)
        } else {
            ConfigSource::Environment
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "file {path}"),
            ConfigSource::Environment => f.write_str("environment"),
        }
    }
}

impl Config {
    /// Load from the detected source
    ///
    /// Runs before the logger exists, so the source is returned for the caller to log.
    pub fn load() -> Result<(Self, ConfigSource), ConfigError> {
        let source = ConfigSource::detect();
        let config = match &source {
            ConfigSource::File(path) => Self::from_file(path)?,
            ConfigSource::Environment => Self::from_env()?,
        };
        Ok((config, source))
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .or_else(|| lookup("TOKEN"))
            .ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let cooldown_sweep_secs = match lookup("COOLDOWN_SWEEP_SECS") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "COOLDOWN_SWEEP_SECS",
                value: raw,
            })?,
            None => default_sweep_secs(),
        };

        let require_voice_channel = match lookup("REQUIRE_VOICE_CHANNEL") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                key: "REQUIRE_VOICE_CHANNEL",
                value: raw,
            })?,
            None => true,
        };

        let config = Config {
            discord_token,
            prefix: lookup("PREFIX").unwrap_or_else(default_prefix),
            locale: lookup("LOCALE").unwrap_or_else(default_locale),
            locales_dir: lookup("LOCALES_DIR").unwrap_or_else(default_locales_dir),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(default_log_level),
            cooldown_sweep_secs,
            require_voice_channel,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discord_token.trim().is_empty() {
            return Err(ConfigError::Missing("DISCORD_TOKEN"));
        }
        if self.prefix.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "PREFIX",
                value: self.prefix.clone(),
            });
        }
        if !SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            return Err(ConfigError::UnsupportedLocale(self.locale.clone()));
        }
        if self.cooldown_sweep_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "COOLDOWN_SWEEP_SECS",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    pub fn cooldown_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.cooldown_sweep_secs)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

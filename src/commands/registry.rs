//! Command registry
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Canonical names plus alias index, duplicate names rejected at startup
//! - 1.0.0: Initial implementation for handler dispatch

use log::{info, warn};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use super::command::Command;
use crate::core::RegistryError;

/// Registry mapping canonical names and aliases to commands
///
/// Built once at startup and read-only afterwards. Canonical names are unique;
/// registering a second command with the same name fails. Aliases follow a
/// first-registration-wins policy: an alias that collides with an existing
/// name or alias is dropped with a warning.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(PlayCommand))?;
///
/// if let Some(command) = registry.resolve("P") {
///     assert_eq!(command.name(), "play");
/// }
/// ```
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
    /// alias -> canonical name
    aliases: HashMap<String, String>,
    /// Canonical names in registration order
    order: Vec<String>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of commands, stopping at the first invalid one
    pub fn with_commands(
        commands: impl IntoIterator<Item = Arc<dyn Command>>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for command in commands {
            registry.register(command)?;
        }
        Ok(registry)
    }

    /// Register a command under its canonical name and aliases
    pub fn register(&mut self, command: Arc<dyn Command>) -> Result<(), RegistryError> {
        let name = command.name();
        validate(name, command.cooldown())?;

        if self.commands.contains_key(name) {
            return Err(RegistryError::DuplicateCommand(name.to_string()));
        }
        let aliases: Vec<String> = command.aliases().iter().map(|a| a.to_lowercase()).collect();
        if let Some(bad) = aliases
            .iter()
            .find(|a| a.is_empty() || a.chars().any(char::is_whitespace))
        {
            return Err(RegistryError::MalformedCommand {
                name: name.to_string(),
                reason: format!("invalid alias `{bad}`"),
            });
        }

        if let Some(owner) = self.aliases.remove(name) {
            warn!("Alias `{name}` of `{owner}` dropped; a command now owns that name");
        }

        for alias in aliases {
            if alias == name {
                continue;
            }
            if self.commands.contains_key(&alias) {
                warn!("Alias `{alias}` of `{name}` collides with command `{alias}`; skipped");
                continue;
            }
            if let Some(owner) = self.aliases.get(&alias) {
                warn!("Alias `{alias}` of `{name}` is already taken by `{owner}`; skipped");
                continue;
            }
            self.aliases.insert(alias, name.to_string());
        }

        info!("Command: {name} loaded");
        self.commands.insert(name.to_string(), command);
        self.order.push(name.to_string());
        Ok(())
    }

    /// Find a command by canonical name, then by alias (case-insensitive)
    pub fn resolve(&self, token: &str) -> Option<Arc<dyn Command>> {
        let token = token.to_lowercase();
        self.commands
            .get(&token)
            .or_else(|| {
                self.aliases
                    .get(&token)
                    .and_then(|name| self.commands.get(name))
            })
            .cloned()
    }

    /// Check if a canonical name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Aliases that were accepted for a command
    pub fn aliases_of(&self, name: &str) -> Vec<&str> {
        let mut aliases: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, owner)| owner.as_str() == name)
            .map(|(alias, _)| alias.as_str())
            .collect();
        aliases.sort_unstable();
        aliases
    }

    /// Number of registered commands (aliases not counted)
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in registration order
    pub fn commands(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.order.iter().filter_map(|name| self.commands.get(name))
    }
}

fn validate(name: &str, cooldown: Duration) -> Result<(), RegistryError> {
    let malformed = |reason: &str| RegistryError::MalformedCommand {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(malformed("name is empty"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(malformed("name contains whitespace"));
    }
    if name.to_lowercase() != name {
        return Err(malformed("name must be lowercase"));
    }
    if cooldown.is_zero() {
        return Err(malformed("cooldown must be positive"));
    }
    Ok(())
}

//! Prefix and mention detection for text commands
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use regex::Regex;

/// A message that addressed the bot, split into command and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// First token, lower-cased; empty when nothing followed the prefix
    pub command_name: String,
    pub args: Vec<String>,
}

/// Recognises messages starting with the configured prefix or a bot mention
#[derive(Debug, Clone)]
pub struct TriggerTokenizer {
    pattern: Regex,
}

impl TriggerTokenizer {
    /// Build the trigger pattern for a bot user id and prefix
    ///
    /// The prefix is matched literally, so `.` or `$` behave as plain characters.
    pub fn new(bot_id: u64, prefix: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"^(<@!?{bot_id}>|{})\s*",
            regex::escape(prefix)
        ))?;
        Ok(Self { pattern })
    }

    /// Split a message into an invocation, or `None` if it does not address the bot
    pub fn tokenize(&self, text: &str) -> Option<Invocation> {
        let matched = self.pattern.find(text)?;
        let mut tokens = text[matched.end()..].split_whitespace();

        let command_name = tokens.next().map(str::to_lowercase).unwrap_or_default();
        let args = tokens.map(str::to_string).collect();

        Some(Invocation { command_name, args })
    }
}

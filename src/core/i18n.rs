//! Localized message catalog
//!
//! Catalogs are JSON files named `<locale>.json`. Nested objects are flattened
//! into dotted keys (`{"common": {"errorCommand": ".."}}` becomes
//! `common.errorCommand`). The English catalog is compiled into the binary and
//! backs every other locale, and a key missing from both resolves to itself.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{Context, Result};
use log::{debug, error, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_LOCALE: &str = "en";
const EMBEDDED_EN: &str = include_str!("../../locales/en.json");

#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// English catalog only
    pub fn english() -> Self {
        let mut messages = HashMap::new();
        // The embedded catalog is part of the build, a parse failure here is a packaging bug
        match serde_json::from_str::<Value>(EMBEDDED_EN) {
            Ok(value) => flatten_into(&mut messages, "", &value),
            Err(e) => error!("❌ Embedded English catalog is invalid JSON: {e}"),
        }
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            messages,
        }
    }

    /// Load `<dir>/<locale>.json` over the embedded English catalog
    ///
    /// A missing file falls back to English with a warning; a malformed one is an error.
    pub fn load(dir: impl AsRef<Path>, locale: &str) -> Result<Self> {
        let mut catalog = Self::english();
        let path = dir.as_ref().join(format!("{locale}.json"));

        if !path.exists() {
            if locale != DEFAULT_LOCALE {
                warn!(
                    "Locale file {} not found, falling back to English",
                    path.display()
                );
            }
            return Ok(catalog);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read locale file {}", path.display()))?;
        catalog.merge_json(&contents)?;
        catalog.locale = locale.to_string();
        debug!(
            "Loaded {} messages for locale {locale}",
            catalog.messages.len()
        );
        Ok(catalog)
    }

    /// Overlay the entries of a JSON catalog onto this one
    pub fn merge_json(&mut self, contents: &str) -> Result<()> {
        let value: Value = serde_json::from_str(contents).context("invalid locale JSON")?;
        flatten_into(&mut self.messages, "", &value);
        Ok(())
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up a message; unknown keys resolve to the key itself
    pub fn get(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Look up a message and substitute `{name}` placeholders
    ///
    /// Single pass over the template: substituted values are never re-scanned,
    /// and placeholders without a substitution are left as written.
    pub fn format(&self, key: &str, substitutions: &[(&str, &str)]) -> String {
        let template = self.get(key);
        let mut out = String::with_capacity(template.len());
        let mut rest = template.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let value = after.find('}').and_then(|close| {
                substitutions
                    .iter()
                    .find(|(name, _)| *name == &after[..close])
                    .map(|(_, value)| (close, *value))
            });
            match value {
                Some((close, value)) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::english()
    }
}

fn flatten_into(out: &mut HashMap<String, String>, prefix: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(out, &path, child);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

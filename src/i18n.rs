//! Translation catalog
//!
//! Key→string lookup over a WebExtension-style `messages.json` document:
//! `{"key": {"message": "...", "description": "..."}}`. Lookup of an
//! unknown key falls back to the key itself, which keeps missing
//! translations visible without failing the page.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::common::prelude::*;

const EMBEDDED_CATALOG: &str = include_str!("../locales/en/messages.json");

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    message: String,
    #[serde(default)]
    #[allow(dead_code)]
    description: Option<String>,
}

/// Key→localized-string lookup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Parse a catalog from raw JSON
    pub fn parse(raw: &str) -> Result<Self> {
        let entries: HashMap<String, CatalogEntry> = serde_json::from_str(raw)?;
        let messages = entries
            .into_iter()
            .map(|(key, entry)| (key, entry.message))
            .collect();
        Ok(Self { messages })
    }

    /// The embedded English catalog
    pub fn embedded() -> Self {
        match Self::parse(EMBEDDED_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Embedded catalog failed to parse: {}", e);
                Self::default()
            }
        }
    }

    /// Load a replacement catalog from disk, falling back to the
    /// embedded one if the file is missing or malformed.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match Self::parse(&raw) {
                Ok(catalog) => {
                    debug!("Loaded catalog from {:?}", path);
                    catalog
                }
                Err(e) => {
                    warn!("Failed to parse catalog {:?}: {}", path, e);
                    Self::embedded()
                }
            },
            Err(e) => {
                warn!("Failed to read catalog {:?}: {}", path, e);
                Self::embedded()
            }
        }
    }

    /// Resolve a key to its localized string; unknown keys resolve to themselves
    pub fn get(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Resolve a key, substituting `$1`..`$N` placeholders
    pub fn get_with_args(&self, key: &str, args: &[&str]) -> String {
        let mut message = self.get(key);
        // Highest index first so $10 is not clobbered by $1
        for (i, arg) in args.iter().enumerate().rev() {
            message = message.replace(&format!("${}", i + 1), arg);
        }
        message
    }
}

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AssistantError, Result};

pub const SCRYFALL_BASE: &str = "https://api.scryfall.com";
pub const OPENROUTER_BASE: &str = "https://openrouter.ai/api/v1";
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const USER_AGENT: &str = concat!("commander-assistant/", env!("CARGO_PKG_VERSION"));

/// Maximum number of cards a card search hands back.
pub const CARD_SEARCH_LIMIT: usize = 10;

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

// ---------------------------------------------------------------------------
// Search domain allow-lists (advisory, forwarded to web-search models)
// ---------------------------------------------------------------------------

pub const DECKLIST_SEARCH_DOMAINS: &[&str] = &[
    "mtgtop8.com",
    "edhrec.com",
    "moxfield.com",
    "archidekt.com",
    "edhtop16.com",
];

pub const CEDH_SEARCH_DOMAINS: &[&str] = &["www.mtgtop8.com", "edhtop16.com"];

pub const DECK_LOOKUP_DOMAINS: &[&str] = &[
    "www.mtgtop8.com",
    "edhtop16.com",
    "moxfield.com",
    "archidekt.com",
];

pub const RULES_SEARCH_DOMAINS: &[&str] = &[
    "magic.wizards.com",
    "gatherer.wizards.com",
    "media.wizards.com",
];

pub fn domains(list: &[&str]) -> Vec<String> {
    list.iter().map(|d| d.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// User settings read from `config.json` and the environment.
///
/// Every field is optional; anything left unset falls back to the builder
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub api_key: Option<String>,
    pub completion_base_url: Option<String>,
    pub card_database_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Model id overrides keyed by model key (e.g. `"search-model"`).
    pub models: HashMap<String, String>,
}

impl Settings {
    /// Load settings from the default config file (if any), then apply the
    /// `OPENROUTER_API_KEY` environment variable on top.
    pub fn load() -> Result<Self> {
        let mut settings = match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        settings.apply_env();
        Ok(settings)
    }

    /// Read settings from an explicit JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            AssistantError::Config(format!("{}: {}", path.display(), e))
        })
    }

    /// Overlay values taken from environment variables.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api_key = Some(key);
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("commander-assistant").join("config.json"))
}

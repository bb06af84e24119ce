use crate::error::{Result, StockpileError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TIMEOUT_SECS: u64 = 8;
const DEFAULT_HISTORY_LIMIT: usize = 32;

pub const KEYS: [&str; 5] = [
    "lookup.base-url",
    "lookup.application-id",
    "lookup.timeout-secs",
    "lookup.image-timeout-secs",
    "lookup.history-limit",
];

/// Configuration for stockpile, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockpileConfig {
    #[serde(default)]
    pub lookup: LookupSettings,
}

/// Product lookup settings. The endpoint and credential have no defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupSettings {
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub application_id: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_timeout_secs")]
    pub image_timeout_secs: u64,

    /// How many successful lookups a session remembers
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            application_id: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            image_timeout_secs: DEFAULT_TIMEOUT_SECS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl StockpileConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockpileError::Io)?;
        let config: StockpileConfig =
            serde_json::from_str(&content).map_err(StockpileError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockpileError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockpileError::Serialization)?;
        fs::write(config_path, content).map_err(StockpileError::Io)?;
        Ok(())
    }

    /// Current value of `key` as text. Unset optional values read as an empty
    /// string; unknown keys read as `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        let lookup = &self.lookup;
        match key {
            "lookup.base-url" => Some(lookup.base_url.clone().unwrap_or_default()),
            "lookup.application-id" => Some(lookup.application_id.clone().unwrap_or_default()),
            "lookup.timeout-secs" => Some(lookup.timeout_secs.to_string()),
            "lookup.image-timeout-secs" => Some(lookup.image_timeout_secs.to_string()),
            "lookup.history-limit" => Some(lookup.history_limit.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let lookup = &mut self.lookup;
        match key {
            "lookup.base-url" => {
                let value = value.trim();
                if !value.is_empty() {
                    url::Url::parse(value).map_err(|e| format!("Invalid URL '{}': {}", value, e))?;
                }
                lookup.base_url = non_empty(value);
            }
            "lookup.application-id" => lookup.application_id = non_empty(value.trim()),
            "lookup.timeout-secs" => lookup.timeout_secs = parse_positive(key, value)?,
            "lookup.image-timeout-secs" => lookup.image_timeout_secs = parse_positive(key, value)?,
            "lookup.history-limit" => lookup.history_limit = parse_positive(key, value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_positive<T>(key: &str, value: &str) -> std::result::Result<T, String>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match value.trim().parse::<T>() {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(format!("{} must be a positive number, got '{}'", key, value)),
    }
}

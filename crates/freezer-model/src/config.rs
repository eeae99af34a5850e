//! Process-wide configuration consumed by the engine.
//!
//! All horizons are whole calendar months. The configuration is owned
//! by the host layer and read-only to the core.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Thresholds for the expiration-warning classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningConfig {
    /// Months before expiration at which the first warning starts.
    pub months_before_first: u32,
    /// Months before expiration at which the second warning starts.
    pub months_before_second: u32,
}

/// Configuration surface consumed by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Default expiration horizon for new items, in months from today.
    pub default_expiration: u32,
    /// Maximum allowed expiration horizon, in months from today.
    pub max_expiration: u32,
    /// Retention window for soft-deleted items before purge.
    pub months_to_keep_deleted_items: u32,
    pub warnings: WarningConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_expiration: 6,
            max_expiration: 24,
            months_to_keep_deleted_items: 3,
            warnings: WarningConfig {
                months_before_first: 3,
                months_before_second: 1,
            },
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or does not parse
    /// as a complete configuration document.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

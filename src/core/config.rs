//! Runtime configuration for the status engine.
//!
//! Three knobs are consumed by the core: the cache TTL, the debounce quiet
//! period for upstream triggers, and whether directory aggregation runs at
//! all. Configuration is stored as JSON under the platform config
//! directory and created with defaults on first use.

use crate::core::dirs::get_config_directory;
use crate::core::error::{Result, TreeStatusError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StatusConfig {
    /// How long a computed status map stays fresh, in milliseconds.
    pub cache_timeout_ms: u64,
    /// Quiet period for coalescing bursts of upstream triggers.
    pub debounce_delay_ms: u64,
    /// When false, directory aggregation is bypassed entirely and
    /// file-only maps are cached and delivered.
    pub show_directory_status: bool,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            cache_timeout_ms: 2000,
            debounce_delay_ms: 200,
            show_directory_status: true,
        }
    }
}

impl StatusConfig {
    /// Loads the config file, creating it with defaults when absent.
    pub fn load_or_create() -> Result<Self> {
        let config_dir = get_config_directory()?;
        let config_file = config_dir.join("config.json");

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)
                .map_err(|e| TreeStatusError::config_read_failed(&config_file, e))?;
            serde_json::from_str(&content)
                .map_err(|e| TreeStatusError::config_parse_failed(&config_file, e))
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = get_config_directory()?;
        std::fs::create_dir_all(&config_dir)?;

        let config_file = config_dir.join("config.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)
            .map_err(|e| TreeStatusError::config_write_failed(&config_file, e))?;

        Ok(())
    }

    pub fn cache_timeout(&self) -> Duration {
        Duration::from_millis(self.cache_timeout_ms)
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }
}

//! Runtime configuration for the list controller and its view.
//!
//! A [`Config`] is handed to constructors explicitly; nothing in the crate
//! reads process-wide settings. Every field has a default, so a TOML
//! document only needs the keys it wants to override:
//!
//! ```rust
//! use commander_list::config::{Config, FilterMode};
//!
//! let config = Config::from_toml_str(
//!     r#"
//!     batch_size = 50
//!     debounce_ms = 150
//!     filter_mode = "fuzzy"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.batch_size, 50);
//! assert_eq!(config.filter_mode, FilterMode::Fuzzy);
//! assert_eq!(config.frame_interval_ms, 16);
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// How filter text is matched against a record's filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Skim-style fuzzy match.
    Fuzzy,
}

/// Tuning knobs and labels for a list controller.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows moved from the staging buffer into the visible list per frame.
    pub batch_size: usize,
    /// Quiet interval before a filter change is applied.
    pub debounce_ms: u64,
    /// Interval between frame ticks when driven by the bubbletea runtime.
    pub frame_interval_ms: u64,
    /// How long a status message stays visible.
    pub status_lifetime_ms: u64,
    /// Filter matching rule.
    pub filter_mode: FilterMode,
    /// Title shown above the list.
    pub title: String,
    /// Status bar noun for one row.
    pub item_name_singular: String,
    /// Status bar noun for several rows.
    pub item_name_plural: String,
    /// Render width in terminal columns.
    pub width: usize,
    /// Render height in terminal rows.
    pub height: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch_size: 25,
            debounce_ms: 300,
            frame_interval_ms: 16,
            status_lifetime_ms: 3000,
            filter_mode: FilterMode::Substring,
            title: "Heroes".to_string(),
            item_name_singular: "hero".to_string(),
            item_name_plural: "heroes".to_string(),
            width: 80,
            height: 24,
        }
    }
}

impl Config {
    /// Parses a configuration from a TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Batch size, never zero.
    pub fn batch_size(&self) -> usize {
        self.batch_size.max(1)
    }

    /// Debounce interval as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Frame interval as a [`Duration`].
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Status message lifetime as a [`Duration`].
    pub fn status_lifetime(&self) -> Duration {
        Duration::from_millis(self.status_lifetime_ms)
    }
}

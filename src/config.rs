//! Configuration file handling
//!
//! Settings live in a TOML file under the user config directory. Loading is
//! forgiving: a missing file yields the defaults, and `migrate_config` can
//! bring an older file up to date by adding the fields it is missing without
//! touching the values (or comments) it already has.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;
use tracing::debug;

/// User configuration for the demo player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playback speed multiplier (1.0 = the authored timeline).
    pub speed: f64,
    /// Theme name (see `Theme::NAMES`).
    pub theme: String,
    /// Typing pause shown before assistant messages, in milliseconds.
    pub typing_pause_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: 1.0,
            theme: "studio".to_string(),
            typing_pause_ms: 600,
        }
    }
}

impl Config {
    /// Path of the config file: `<user config dir>/chatcast/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine the user config directory")?;
        Ok(base.join("chatcast").join("config.toml"))
    }

    /// Load the config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path (missing file is an error here).
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Write the config to its default location, creating directories as
    /// needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Write the config to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("serializing config")?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))
    }

    /// The typing pause as a `Duration`.
    pub fn typing_pause(&self) -> Duration {
        Duration::from_millis(self.typing_pause_ms)
    }
}

/// Outcome of a config migration.
#[derive(Debug)]
pub struct MigrateResult {
    /// The migrated file content.
    pub content: String,
    /// Top-level fields that were added.
    pub added_fields: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add missing fields (with their default values) to an existing config
/// file's content, preserving everything - values, ordering, comments - the
/// file already has.
pub fn migrate_config(content: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = content.parse().context("parsing existing config")?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())
        .context("serializing default config")?
        .parse()
        .context("re-parsing default config")?;

    let mut added_fields = Vec::new();
    for (key, value) in defaults.iter() {
        if !doc.contains_key(key) {
            doc[key] = value.clone();
            added_fields.push(key.to_string());
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
    })
}

//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use tracing::debug;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.mindful/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mindful")
    }

    /// Get the global config file path (~/.mindful/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the explicit config file if given, else the global one, else defaults.
    ///
    /// An explicit path that does not exist is an error; a missing global
    /// file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            debug!(path = %global_path.display(), "loading global config");
            return Self::from_file(&global_path);
        }

        Ok(Self::default())
    }

    /// Save configuration to a file with atomic write and file locking.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        write_locked(path, &content)
    }
}

/// Write `content` to `path` under an exclusive lock, via temp file + rename
pub fn write_locked(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }

    // Lock file is separate from the config so the rename cannot drop the lock
    let lock_path = path.with_extension("toml.lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    lock_file
        .lock_exclusive()
        .with_context(|| "Failed to acquire config lock")?;

    let temp_path = path.with_extension("toml.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write config content")?;

    temp_file
        .sync_all()
        .with_context(|| "Failed to sync config file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

    // Lock is released when lock_file is dropped
    Ok(())
}

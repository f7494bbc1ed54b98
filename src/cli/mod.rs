//! CLI command implementations

pub mod dashboard;
pub mod init;
pub mod journal;
pub mod mood;
pub mod pet;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use mindful::config::Config;
use mindful::store::{Store, User};

/// Everything a command needs: settings, storage and the acting user
pub struct Session {
    pub config: Config,
    pub store: Store,
    pub user: User,
    pub json: bool,
}

impl Session {
    pub fn open(config_path: Option<&Path>, user: Option<String>, json: bool) -> Result<Self> {
        let config = Config::load(config_path)?;
        let db_path = config.database_path();
        let store = Store::with_path(&db_path)?;

        let username = user.unwrap_or_else(|| config.settings.default_user.clone());
        let user = store
            .users()
            .get_or_create(&username)
            .with_context(|| format!("Failed to load user {username}"))?;
        debug!(user = %user.username, db = %db_path.display(), "session ready");

        Ok(Self {
            config,
            store,
            user,
            json,
        })
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a 0.0 - 1.0 fraction as a fixed-width bar
pub fn progress_bar(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;
use tracing::info;

use mindful::config::{Config, DEFAULT_CONFIG, write_locked};

/// Write the default configuration file
pub async fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    write_locked(&path, DEFAULT_CONFIG)?;
    info!(path = %path.display(), "wrote config");
    println!("Created {}", path.display());

    Ok(())
}

//! Configuration loading and management

mod io;
mod settings;

pub use io::write_locked;
pub use settings::{DayBoundary, PetDefaults, Settings};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Database file to open, falling back to ~/.mindful/mindful.db
    pub fn database_path(&self) -> PathBuf {
        self.settings
            .database_path
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("mindful.db"))
    }
}

/// Default configuration content for `mindful init`
pub const DEFAULT_CONFIG: &str = r#"# Mindful Configuration
# =====================
#
# Available options:
#   database_path - SQLite file for check-ins, journal and pet (default: ~/.mindful/mindful.db)
#   default_user  - User to act as when --user is not given (default: "me")
#   day_boundary  - Timezone that decides when a day ends, for streaks:
#                   "local", "utc", or a fixed offset like "+05:30" (default: "local")

[settings]
default_user = "me"
day_boundary = "local"
# database_path = "/path/to/mindful.db"

# Pet adopted the first time you visit it
#   species - "cat", "fox" or "dragon"
[settings.pet]
species = "cat"
name = "Fluffy"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Species;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [settings]
            day_boundary = "utc"

            [settings.pet]
            species = "dragon"
            "#,
        )
        .unwrap();
        assert_eq!(config.settings.day_boundary, DayBoundary::Utc);
        assert_eq!(config.settings.pet.species, Species::Dragon);
        assert_eq!(config.settings.pet.name, "Fluffy");
        assert_eq!(config.settings.default_user, "me");
    }

    #[test]
    fn test_invalid_day_boundary_rejected() {
        let result: Result<Config, _> = toml::from_str("[settings]\nday_boundary = \"noon\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.settings.default_user = "ana".to_string();
        config.settings.database_path = Some(dir.path().join("data.db"));
        config.save_to_file(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.database_path(), dir.path().join("data.db"));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }
}

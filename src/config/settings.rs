//! Settings configuration types

use std::path::PathBuf;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::domain::Species;

/// General settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Database file. Defaults to ~/.mindful/mindful.db
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    /// User to act as when `--user` is not given
    #[serde(default = "default_user")]
    pub default_user: String,

    /// Where one calendar day ends and the next begins for streaks
    #[serde(default)]
    pub day_boundary: DayBoundary,

    /// Pet adopted on first visit
    #[serde(default)]
    pub pet: PetDefaults,
}

fn default_user() -> String {
    "me".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: None,
            default_user: default_user(),
            day_boundary: DayBoundary::default(),
            pet: PetDefaults::default(),
        }
    }
}

/// Species and name for a newly adopted pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetDefaults {
    #[serde(default)]
    pub species: Species,

    #[serde(default = "default_pet_name")]
    pub name: String,
}

fn default_pet_name() -> String {
    "Fluffy".to_string()
}

impl Default for PetDefaults {
    fn default() -> Self {
        Self {
            species: Species::default(),
            name: default_pet_name(),
        }
    }
}

/// Timezone used to split timestamps into calendar days.
///
/// Written in config as `"local"`, `"utc"`, or a fixed offset like `"+05:30"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayBoundary {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl TryFrom<String> for DayBoundary {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" | "z" => Ok(Self::Utc),
            other => parse_offset(other)
                .map(Self::Fixed)
                .ok_or_else(|| format!("invalid day_boundary: {value} (use local, utc or +HH:MM)")),
        }
    }
}

impl From<DayBoundary> for String {
    fn from(value: DayBoundary) -> Self {
        match value {
            DayBoundary::Local => "local".to_string(),
            DayBoundary::Utc => "utc".to_string(),
            DayBoundary::Fixed(offset) => offset.to_string(),
        }
    }
}

/// Parse `+HH:MM`, `-HH:MM` or `+HHMM`
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

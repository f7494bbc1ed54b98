use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::progress::ProgressError;

/// Upper bound for hunger, happiness and energy
pub const MAX_STAT: u8 = 100;

/// Kind of virtual pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    Cat,
    Fox,
    Dragon,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Fox => "fox",
            Self::Dragon => "dragon",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "cat" => Some(Self::Cat),
            "fox" => Some(Self::Fox),
            "dragon" => Some(Self::Dragon),
            _ => None,
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user's virtual pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub owner_id: Uuid,
    pub species: Species,
    pub name: String,
    pub level: u32,
    /// Progress toward the next level, always below `XP_PER_LEVEL` at rest
    pub xp: u32,
    pub hunger: u8,
    pub happiness: u8,
    pub energy: u8,
    pub evolution_stage: u32,
}

impl Pet {
    /// A freshly adopted pet: level 1, no xp, every stat full
    pub fn new(owner_id: Uuid, species: Species, name: impl Into<String>) -> Self {
        Self {
            owner_id,
            species,
            name: name.into(),
            level: 1,
            xp: 0,
            hunger: MAX_STAT,
            happiness: MAX_STAT,
            energy: MAX_STAT,
            evolution_stage: 1,
        }
    }
}

/// Something the user can do with their pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "amount")]
pub enum PetAction {
    Play,
    Feed,
    Sleep,
    GrantXp(i64),
}

impl PetAction {
    /// Build an action from its kind name and an optional xp amount
    pub fn from_parts(kind: &str, amount: Option<i64>) -> Result<Self, ProgressError> {
        match (kind.trim().to_lowercase().as_str(), amount) {
            ("play", None) => Ok(Self::Play),
            ("feed", None) => Ok(Self::Feed),
            ("sleep", None) => Ok(Self::Sleep),
            ("xp" | "grant_xp", Some(n)) => Ok(Self::GrantXp(n)),
            ("xp" | "grant_xp", None) => Err(ProgressError::InvalidInput(
                "xp action requires an amount".to_string(),
            )),
            ("play" | "feed" | "sleep", Some(_)) => Err(ProgressError::InvalidInput(format!(
                "{kind} action does not take an amount"
            ))),
            _ => Err(ProgressError::InvalidInput(format!(
                "unknown pet action: {kind}"
            ))),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Feed => "feed",
            Self::Sleep => "sleep",
            Self::GrantXp(_) => "xp",
        }
    }
}

impl FromStr for PetAction {
    type Err = ProgressError;

    /// Accepts `play`, `feed`, `sleep` and `xp:<amount>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((kind, amount)) => {
                let amount = amount.trim().parse::<i64>().map_err(|_| {
                    ProgressError::InvalidInput(format!("invalid xp amount: {amount}"))
                })?;
                Self::from_parts(kind, Some(amount))
            }
            None => Self::from_parts(s, None),
        }
    }
}

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the user felt at check-in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Neutral,
    Excited,
    Stressed,
}

impl Mood {
    /// Every mood in display order
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Neutral,
        Mood::Excited,
        Mood::Stressed,
    ];

    /// Get the string value used for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Neutral => "neutral",
            Self::Excited => "excited",
            Self::Stressed => "stressed",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😢",
            Self::Neutral => "😐",
            Self::Excited => "🤩",
            Self::Stressed => "😖",
        }
    }

    /// Position on the 1 (low) to 5 (high) scale used for trend charts
    pub fn scale(&self) -> u8 {
        match self {
            Self::Sad => 1,
            Self::Stressed => 2,
            Self::Neutral => 3,
            Self::Happy => 4,
            Self::Excited => 5,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a mood string is not one of the known values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid mood value: {0} (expected happy, sad, neutral, excited or stressed)")]
pub struct ParseMoodError(pub String);

impl FromStr for Mood {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Self::Happy),
            "sad" => Ok(Self::Sad),
            "neutral" => Ok(Self::Neutral),
            "excited" => Ok(Self::Excited),
            "stressed" => Ok(Self::Stressed),
            _ => Err(ParseMoodError(s.to_string())),
        }
    }
}

/// A single mood check-in. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodCheckin {
    pub owner_id: Uuid,
    pub mood: Mood,
    pub recorded_at: DateTime<Utc>,
}

impl MoodCheckin {
    pub fn new(owner_id: Uuid, mood: Mood, recorded_at: DateTime<Utc>) -> Self {
        Self {
            owner_id,
            mood,
            recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_moods() {
        for mood in Mood::ALL {
            assert_eq!(mood.as_str().parse::<Mood>().unwrap(), mood);
        }
        assert_eq!(" Happy ".parse::<Mood>().unwrap(), Mood::Happy);
    }

    #[test]
    fn test_parse_rejects_unknown_mood() {
        let err = "angry".parse::<Mood>().unwrap_err();
        assert_eq!(err, ParseMoodError("angry".to_string()));
    }

    #[test]
    fn test_scale_orders_sad_to_excited() {
        assert_eq!(Mood::Sad.scale(), 1);
        assert_eq!(Mood::Excited.scale(), 5);
        assert!(Mood::Stressed.scale() < Mood::Neutral.scale());
    }

    #[test]
    fn test_serde_uses_lowercase_values() {
        let json = serde_json::to_string(&Mood::Stressed).unwrap();
        assert_eq!(json, "\"stressed\"");
    }
}

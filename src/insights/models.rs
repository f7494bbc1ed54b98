//! Dashboard data models

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::Mood;
use crate::progress::StreakSummary;

/// Number of check-ins for one mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodCount {
    pub mood: Mood,
    pub count: u32,
}

/// One point on the mood trend line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub day: NaiveDate,
    pub mood: Mood,
    pub scale: u8,
}

/// Most recent check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestMood {
    pub mood: Mood,
    pub recorded_at: DateTime<Utc>,
}

/// Everything the dashboard shows, derived from a user's check-in history
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub streak: StreakSummary,
    pub best_streak: u32,
    pub badges: Vec<&'static str>,
    pub total_checkins: usize,
    pub latest: Option<LatestMood>,
    /// All-time count per mood, in `Mood::ALL` order
    pub distribution: Vec<MoodCount>,
    /// Counts over the trailing seven days, in `Mood::ALL` order
    pub weekly: Vec<MoodCount>,
    /// Oldest first
    pub trend: Vec<TrendPoint>,
    pub quote: &'static str,
}

impl DashboardSummary {
    /// Average mood scale over the trailing week, if there were any check-ins
    pub fn weekly_average(&self) -> Option<f64> {
        let (sum, n) = self
            .weekly
            .iter()
            .fold((0u32, 0u32), |(sum, n), c| {
                (sum + u32::from(c.mood.scale()) * c.count, n + c.count)
            });
        if n == 0 {
            None
        } else {
            Some(f64::from(sum) / f64::from(n))
        }
    }
}

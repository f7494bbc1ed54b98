//! Dashboard insights built from a user's mood history
//!
//! Like the streak engine, everything here is computed from the check-ins
//! passed in, with "now" supplied by the caller.

mod models;

pub use models::{DashboardSummary, LatestMood, MoodCount, TrendPoint};

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone, Utc};

use crate::config::DayBoundary;
use crate::domain::{Mood, MoodCheckin};
use crate::progress::{StreakSummary, compute_streak, earned_badges, longest_streak};

impl DayBoundary {
    /// Calendar date of `now` on this boundary
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Local => now.with_timezone(&Local).date_naive(),
            Self::Utc => now.date_naive(),
            Self::Fixed(offset) => now.with_timezone(offset).date_naive(),
        }
    }

    /// Streak as of `now`, with days split on this boundary
    pub fn streak_at(&self, checkins: &[MoodCheckin], now: DateTime<Utc>) -> StreakSummary {
        match self {
            Self::Local => compute_streak(checkins, &now.with_timezone(&Local)),
            Self::Utc => compute_streak(checkins, &now),
            Self::Fixed(offset) => compute_streak(checkins, &now.with_timezone(offset)),
        }
    }

    /// Dashboard as of `now`, with days split on this boundary
    pub fn dashboard_at(&self, checkins: &[MoodCheckin], now: DateTime<Utc>) -> DashboardSummary {
        match self {
            Self::Local => build_dashboard(checkins, &now.with_timezone(&Local)),
            Self::Utc => build_dashboard(checkins, &now),
            Self::Fixed(offset) => build_dashboard(checkins, &now.with_timezone(offset)),
        }
    }
}

/// Rotating encouragement shown on the dashboard
pub static QUOTES: &[&str] = &[
    "🌟 Every check-in is a step towards self-awareness.",
    "💪 Small progress each day adds up to big results.",
    "🌈 Your feelings matter. Honor them today.",
    "🔥 Consistency builds strength. Keep going!",
    "💖 Be kind to yourself, you're doing amazing.",
    "🌻 You are growing beautifully, keep shining!",
];

/// Quote for the day of the month `now` falls on
pub fn quote_of_the_day<Tz: TimeZone>(now: &DateTime<Tz>) -> &'static str {
    QUOTES[now.day() as usize % QUOTES.len()]
}

fn count_moods<'a>(checkins: impl Iterator<Item = &'a MoodCheckin>) -> Vec<MoodCount> {
    let mut counts: Vec<MoodCount> = Mood::ALL
        .iter()
        .map(|&mood| MoodCount { mood, count: 0 })
        .collect();
    for checkin in checkins {
        if let Some(slot) = counts.iter_mut().find(|c| c.mood == checkin.mood) {
            slot.count += 1;
        }
    }
    counts
}

/// Build the dashboard for one user's complete check-in history
pub fn build_dashboard<Tz: TimeZone>(checkins: &[MoodCheckin], now: &DateTime<Tz>) -> DashboardSummary {
    let streak = compute_streak(checkins, now);
    let tz = now.timezone();
    let week_start = now.clone() - Duration::days(7);

    let mut ordered: Vec<&MoodCheckin> = checkins.iter().collect();
    ordered.sort_by_key(|c| c.recorded_at);

    let latest = ordered.last().map(|c| LatestMood {
        mood: c.mood,
        recorded_at: c.recorded_at,
    });

    let trend = ordered
        .iter()
        .map(|c| TrendPoint {
            day: c.recorded_at.with_timezone(&tz).date_naive(),
            mood: c.mood,
            scale: c.mood.scale(),
        })
        .collect();

    DashboardSummary {
        streak,
        best_streak: longest_streak(checkins, &tz).max(streak.streak_count),
        badges: earned_badges(streak.streak_count)
            .into_iter()
            .map(|b| b.label)
            .collect(),
        total_checkins: checkins.len(),
        latest,
        distribution: count_moods(checkins.iter()),
        weekly: count_moods(checkins.iter().filter(|c| c.recorded_at >= week_start)),
        trend,
        quote: quote_of_the_day(now),
    }
}

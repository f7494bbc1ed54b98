//! Check-in streak tracking
//!
//! Streaks are derived from the full check-in history on every read rather
//! than stored, so there is nothing to repair when history changes.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::domain::MoodCheckin;

/// Result of a streak computation, shaped for API responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub streak_count: u32,
    pub is_milestone: bool,
}

impl StreakSummary {
    pub fn new(streak_count: u32) -> Self {
        Self {
            streak_count,
            is_milestone: is_milestone(streak_count),
        }
    }
}

/// Badge awarded once the current streak reaches a threshold
#[derive(Debug, Clone)]
pub struct StreakBadge {
    pub threshold: u32,
    pub label: &'static str,
}

/// All streak badges (must be sorted by threshold)
pub static STREAK_BADGES: &[StreakBadge] = &[
    StreakBadge {
        threshold: 3,
        label: "🌱 Getting Started",
    },
    StreakBadge {
        threshold: 7,
        label: "🔥 One Week Warrior",
    },
    StreakBadge {
        threshold: 14,
        label: "🌟 Two Weeks Strong",
    },
    StreakBadge {
        threshold: 30,
        label: "🏆 One Month Milestone",
    },
];

/// Badges earned at the given streak length
pub fn earned_badges(streak: u32) -> Vec<&'static StreakBadge> {
    STREAK_BADGES
        .iter()
        .filter(|b| streak >= b.threshold)
        .collect()
}

/// Whether a streak length deserves a celebration: 3, 7, or any multiple of 10
pub fn is_milestone(streak: u32) -> bool {
    streak > 0 && (streak == 3 || streak == 7 || streak % 10 == 0)
}

/// Distinct calendar days with at least one check-in, as seen in `tz`
pub fn checkin_days<Tz: TimeZone>(checkins: &[MoodCheckin], tz: &Tz) -> BTreeSet<NaiveDate> {
    checkins
        .iter()
        .map(|c| c.recorded_at.with_timezone(tz).date_naive())
        .collect()
}

/// Compute the consecutive-day streak ending today.
///
/// Every check-in is bucketed into a calendar day using `now`'s timezone.
/// Without a check-in today the streak is 0, even if yesterday had one.
pub fn compute_streak<Tz: TimeZone>(checkins: &[MoodCheckin], now: &DateTime<Tz>) -> StreakSummary {
    let days = checkin_days(checkins, &now.timezone());
    StreakSummary::new(streak_ending_on(&days, now.date_naive()))
}

/// Count consecutive days present in `days`, walking backward from `today`
pub fn streak_ending_on(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    if !days.contains(&today) {
        return 0;
    }

    let mut count = 1;
    let mut cursor = today;
    while let Some(previous) = cursor.pred_opt() {
        if !days.contains(&previous) {
            break;
        }
        count += 1;
        cursor = previous;
    }
    count
}

/// Longest run of consecutive check-in days anywhere in the history
pub fn longest_streak<Tz: TimeZone>(checkins: &[MoodCheckin], tz: &Tz) -> u32 {
    let days = checkin_days(checkins, tz);

    let mut best = 0;
    let mut run = 0;
    let mut last: Option<NaiveDate> = None;
    for day in days {
        run = match last {
            Some(prev) if prev.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        last = Some(day);
    }
    best
}

//! Streak engine behavior over whole histories

use chrono::{Duration, FixedOffset};
use mindful::progress::{compute_streak, is_milestone};
use mindful::{Mood, MoodCheckin};
use uuid::Uuid;

use crate::common::{fixed_now, history};

#[test]
fn test_no_entry_today_is_always_zero() {
    let now = fixed_now();
    for days in [vec![1], vec![1, 2, 3], vec![2, 3, 4, 5, 6, 7]] {
        assert_eq!(compute_streak(&history(now, &days), &now).streak_count, 0);
    }
}

#[test]
fn test_unbroken_run_counts_every_day() {
    let now = fixed_now();
    for n in 1..=15i64 {
        let days: Vec<i64> = (0..n).collect();
        assert_eq!(
            compute_streak(&history(now, &days), &now).streak_count,
            n as u32
        );
    }
}

#[test]
fn test_duplicates_within_run_do_not_inflate() {
    let now = fixed_now();
    let mut checkins = history(now, &[0, 0, 0, 1, 1, 2]);
    checkins.extend(history(now - Duration::hours(5), &[0, 2]));
    assert_eq!(compute_streak(&checkins, &now).streak_count, 3);
}

#[test]
fn test_gap_caps_streak_even_with_older_entries() {
    let now = fixed_now();
    // Gap at day 3: today, 1, 2 count; 4..9 are ignored
    let checkins = history(now, &[0, 1, 2, 4, 5, 6, 7, 8, 9]);
    assert_eq!(compute_streak(&checkins, &now).streak_count, 3);
}

#[test]
fn test_today_yesterday_and_three_days_ago() {
    let now = fixed_now();
    let checkins = history(now, &[0, 1, 3]);
    let summary = compute_streak(&checkins, &now);
    assert_eq!(summary.streak_count, 2);
    assert!(!summary.is_milestone);
}

#[test]
fn test_order_of_input_does_not_matter() {
    let now = fixed_now();
    let mut checkins = history(now, &[2, 0, 1, 6]);
    let forward = compute_streak(&checkins, &now);
    checkins.reverse();
    assert_eq!(compute_streak(&checkins, &now), forward);
    assert_eq!(forward.streak_count, 3);
    assert!(forward.is_milestone);
}

#[test]
fn test_timezone_applies_to_now_and_checkins_alike() {
    // now is 14:00 UTC on the 15th, 23:00 on the 15th at UTC+9.
    // 16:00 UTC on the 14th is 01:00 on the 15th at UTC+9.
    let now = fixed_now();
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    let checkins = vec![
        MoodCheckin::new(Uuid::nil(), Mood::Sad, now),
        MoodCheckin::new(Uuid::nil(), Mood::Sad, now - Duration::hours(22)),
    ];

    assert_eq!(compute_streak(&checkins, &now).streak_count, 2);
    assert_eq!(
        compute_streak(&checkins, &now.with_timezone(&tokyo)).streak_count,
        1
    );
}

#[test]
fn test_milestone_rule() {
    let expected: Vec<u32> = (0..=60)
        .filter(|&s| s == 3 || s == 7 || (s > 0 && s % 10 == 0))
        .collect();
    let actual: Vec<u32> = (0..=60).filter(|&s| is_milestone(s)).collect();
    assert_eq!(actual, expected);
}

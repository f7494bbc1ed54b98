//! Mood check-in and streak commands

use anyhow::Result;
use chrono::{Local, Utc};
use serde_json::json;

use mindful::Mood;
use mindful::progress::StreakSummary;

use super::{Session, print_json};

/// Record a check-in and report the updated streak
pub async fn checkin_command(session: &Session, mood: Mood) -> Result<()> {
    let now = Utc::now();
    let checkin = session.store.moods().record(session.user.id, mood, now)?;
    let history = session.store.moods().checkins_for(session.user.id)?;
    let streak = session.config.settings.day_boundary.streak_at(&history, now);

    if session.json {
        return print_json(&json!({ "checkin": checkin, "streak": streak }));
    }

    println!("{} Checked in as {}", mood.emoji(), mood);
    print_streak(&streak);
    Ok(())
}

/// List check-ins, newest first
pub async fn moods_command(session: &Session, limit: Option<usize>) -> Result<()> {
    let history = session.store.moods().checkins_for(session.user.id)?;
    let shown: Vec<_> = history.iter().take(limit.unwrap_or(usize::MAX)).collect();

    if session.json {
        return print_json(&shown);
    }

    if shown.is_empty() {
        println!("No check-ins yet. Try `mindful checkin happy`.");
        return Ok(());
    }

    println!("Mood history ({} of {}):\n", shown.len(), history.len());
    for checkin in shown {
        println!(
            "  {} {:<9} {}",
            checkin.mood.emoji(),
            checkin.mood.as_str(),
            checkin.recorded_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

/// Show the current streak
pub async fn streak_command(session: &Session) -> Result<()> {
    let history = session.store.moods().checkins_for(session.user.id)?;
    let streak = session
        .config
        .settings
        .day_boundary
        .streak_at(&history, Utc::now());

    if session.json {
        return print_json(&streak);
    }

    print_streak(&streak);
    Ok(())
}

pub(super) fn print_streak(streak: &StreakSummary) {
    match streak.streak_count {
        0 => println!("🔥 No streak yet today. Check in to start one!"),
        1 => println!("🔥 Current streak: 1 day"),
        n => println!("🔥 Current streak: {n} days"),
    }
    if streak.is_milestone {
        println!("🎉 {}-day milestone! Keep it up!", streak.streak_count);
    }
}

//! Dashboard command

use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};

use mindful::insights::DashboardSummary;

use super::mood::print_streak;
use super::{Session, print_json, progress_bar};

pub async fn dashboard_command(session: &Session) -> Result<()> {
    let now = Utc::now();
    let boundary = session.config.settings.day_boundary;
    let history = session.store.moods().checkins_for(session.user.id)?;
    let summary = boundary.dashboard_at(&history, now);

    if session.json {
        return print_json(&summary);
    }

    print_dashboard(&session.user.username, boundary.today(now), &summary);
    Ok(())
}

fn print_dashboard(username: &str, today: NaiveDate, summary: &DashboardSummary) {
    println!("🌈 Mindful dashboard for {username}, {}\n", today.format("%A %Y-%m-%d"));
    println!("{}\n", summary.quote);

    print_streak(&summary.streak);
    println!("🏅 Best streak: {} days", summary.best_streak);
    if !summary.badges.is_empty() {
        println!("   Badges: {}", summary.badges.join(", "));
    }
    println!();

    let Some(latest) = summary.latest else {
        println!("No check-ins yet. Try `mindful checkin happy`.");
        return;
    };
    println!(
        "💖 Latest mood: {} {} on {}",
        latest.mood.emoji(),
        latest.mood,
        latest.recorded_at.with_timezone(&Local).format("%Y-%m-%d")
    );

    println!("\n🍰 Mood distribution ({} check-ins):", summary.total_checkins);
    for count in &summary.distribution {
        let share = count.count as f32 / summary.total_checkins.max(1) as f32;
        println!(
            "   {} {:<9} {} {}",
            count.mood.emoji(),
            count.mood.as_str(),
            progress_bar(share, 20),
            count.count
        );
    }

    if summary.weekly.iter().any(|c| c.count > 0) {
        println!("\n🗓  Weekly reflection:");
        for count in summary.weekly.iter().filter(|c| c.count > 0) {
            println!("   {} {}: {} times", count.mood.emoji(), count.mood, count.count);
        }
        if let Some(avg) = summary.weekly_average() {
            println!("   Average mood: {avg:.1} / 5");
        }
    }
}

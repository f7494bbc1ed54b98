//! Shared test utilities
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use mindful::{Mood, MoodCheckin, Pet, Species};
use uuid::Uuid;

/// A fixed "now" in the middle of a UTC day
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 15, 14, 0, 0).unwrap()
}

/// One happy check-in per entry, each `days_ago` days before `now`
pub fn history(now: DateTime<Utc>, days_ago: &[i64]) -> Vec<MoodCheckin> {
    days_ago
        .iter()
        .map(|d| MoodCheckin::new(Uuid::nil(), Mood::Happy, now - Duration::days(*d)))
        .collect()
}

/// A default pet with the given level and xp
pub fn pet_at(level: u32, xp: u32) -> Pet {
    let mut pet = Pet::new(Uuid::nil(), Species::Cat, "Fluffy");
    pet.level = level;
    pet.xp = xp;
    pet
}

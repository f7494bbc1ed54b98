//! Mood check-in storage

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use super::db::WellbeingDb;
use super::error::{StoreError, StoreResult, timestamp_from_ms};
use crate::domain::{Mood, MoodCheckin};

#[derive(Clone)]
pub struct MoodStore {
    db: WellbeingDb,
}

impl MoodStore {
    pub fn new(db: WellbeingDb) -> Self {
        Self { db }
    }

    /// Record a check-in at the given moment
    pub fn record(&self, owner_id: Uuid, mood: Mood, at: DateTime<Utc>) -> StoreResult<MoodCheckin> {
        let conn = self.db.conn();
        conn.execute(
            "INSERT INTO mood_checkins (owner_id, mood, recorded_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![owner_id.to_string(), mood.as_str(), at.timestamp_millis()],
        )?;
        debug!(%owner_id, mood = mood.as_str(), "recorded mood check-in");

        // Round-trip through milliseconds so callers see what was stored
        let recorded_at = timestamp_from_ms("mood_checkins", at.timestamp_millis())?;
        Ok(MoodCheckin::new(owner_id, mood, recorded_at))
    }

    /// All check-ins for a user, newest first
    pub fn checkins_for(&self, owner_id: Uuid) -> StoreResult<Vec<MoodCheckin>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT mood, recorded_at FROM mood_checkins WHERE owner_id = ?1 ORDER BY recorded_at DESC, id DESC",
        )?;
        let rows = stmt
            .query_map([owner_id.to_string()], |r| {
                Ok((r.get::<_, String>(0)?, r.get::<_, i64>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(mood, ts)| {
                let mood = mood
                    .parse::<Mood>()
                    .map_err(|e| StoreError::corrupt("mood_checkins", e.to_string()))?;
                Ok(MoodCheckin::new(
                    owner_id,
                    mood,
                    timestamp_from_ms("mood_checkins", ts)?,
                ))
            })
            .collect()
    }
}

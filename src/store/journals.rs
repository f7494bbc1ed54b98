//! Journal entry storage

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use super::db::WellbeingDb;
use super::error::{StoreResult, timestamp_from_ms};
use crate::domain::{JournalEntry, NewJournalEntry};

#[derive(Clone)]
pub struct JournalStore {
    db: WellbeingDb,
}

impl JournalStore {
    pub fn new(db: WellbeingDb) -> Self {
        Self { db }
    }

    /// Store a validated entry
    pub fn add(
        &self,
        owner_id: Uuid,
        entry: NewJournalEntry,
        at: DateTime<Utc>,
    ) -> StoreResult<JournalEntry> {
        let conn = self.db.conn();
        conn.execute(
            "INSERT INTO journal_entries (owner_id, content, mood, written_at) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                owner_id.to_string(),
                entry.content,
                entry.mood,
                at.timestamp_millis()
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!(%owner_id, id, "saved journal entry");

        Ok(JournalEntry {
            id,
            owner_id,
            written_at: timestamp_from_ms("journal_entries", at.timestamp_millis())?,
            content: entry.content,
            mood: entry.mood,
        })
    }

    /// All entries for a user, newest first
    pub fn entries_for(&self, owner_id: Uuid) -> StoreResult<Vec<JournalEntry>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT id, content, mood, written_at FROM journal_entries WHERE owner_id = ?1 ORDER BY written_at DESC, id DESC",
        )?;
        let rows = stmt
            .query_map([owner_id.to_string()], |r| {
                Ok((
                    r.get::<_, i64>(0)?,
                    r.get::<_, String>(1)?,
                    r.get::<_, String>(2)?,
                    r.get::<_, i64>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, content, mood, ts)| {
                Ok(JournalEntry {
                    id,
                    owner_id,
                    written_at: timestamp_from_ms("journal_entries", ts)?,
                    content,
                    mood,
                })
            })
            .collect()
    }

    /// Entries whose content or mood tag matches `term`, newest first
    pub fn search(&self, owner_id: Uuid, term: &str) -> StoreResult<Vec<JournalEntry>> {
        Ok(self
            .entries_for(owner_id)?
            .into_iter()
            .filter(|e| e.matches(term))
            .collect())
    }
}

//! User lookup - resolves usernames to owner ids

use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::db::WellbeingDb;
use super::error::{StoreResult, timestamp_from_ms, uuid_from_str};

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct UserStore {
    db: WellbeingDb,
}

impl UserStore {
    pub fn new(db: WellbeingDb) -> Self {
        Self { db }
    }

    /// Find a user by name
    pub fn find(&self, username: &str) -> StoreResult<Option<User>> {
        let conn = self.db.conn();
        let row = conn
            .query_row(
                "SELECT id, username, created_at FROM users WHERE username = ?1",
                [username],
                |r| {
                    Ok((
                        r.get::<_, String>(0)?,
                        r.get::<_, String>(1)?,
                        r.get::<_, i64>(2)?,
                    ))
                },
            )
            .optional()?;

        row.map(|(id, username, created_at)| {
            Ok(User {
                id: uuid_from_str("users", &id)?,
                username,
                created_at: timestamp_from_ms("users", created_at)?,
            })
        })
        .transpose()
    }

    /// Find a user by name, registering them on first use
    pub fn get_or_create(&self, username: &str) -> StoreResult<User> {
        if let Some(user) = self.find(username)? {
            return Ok(user);
        }

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        let conn = self.db.conn();
        conn.execute(
            "INSERT OR IGNORE INTO users (id, username, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![
                user.id.to_string(),
                user.username,
                user.created_at.timestamp_millis()
            ],
        )?;
        drop(conn);
        info!(username, "registered user");

        // Another process may have won the insert race
        Ok(self.find(username)?.unwrap_or(user))
    }
}

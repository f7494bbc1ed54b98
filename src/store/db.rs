//! SQLite database connection and schema management
//!
//! Opens the wellbeing database (by default `~/.mindful/mindful.db`, see
//! `Config::database_path`) and applies schema migrations.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::{debug, info};

/// Current schema version written by `run_migrations`
pub const SCHEMA_VERSION: i32 = 2;

/// Shared handle to the wellbeing database
#[derive(Clone)]
pub struct WellbeingDb {
    conn: Arc<Mutex<Connection>>,
}

impl WellbeingDb {
    /// Open or create the database at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;

        // WAL lets a reader (dashboard) run while the CLI writes
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        debug!(path = %path.display(), "opened wellbeing database");

        Self::from_connection(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Lock the connection for a query or transaction
    pub fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().expect("Wellbeing DB lock poisoned")
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(SCHEMA_SQL)?;
        drop(conn);
        self.run_migrations()?;
        Ok(())
    }

    /// Read the schema version recorded in the database
    pub fn schema_version(&self) -> Result<i32> {
        let conn = self.conn();
        let version = conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |r| r.get(0),
        )?;
        Ok(version)
    }

    fn run_migrations(&self) -> Result<()> {
        let version = self.schema_version()?;
        let conn = self.conn();

        // Migration 2: optimistic concurrency for pet updates
        if version < 2 {
            let has_revision: bool = conn
                .prepare("SELECT COUNT(*) FROM pragma_table_info('pets') WHERE name = 'revision'")
                .and_then(|mut s| s.query_row([], |r| r.get::<_, i32>(0)))
                .map(|c| c > 0)
                .unwrap_or(false);

            if !has_revision {
                conn.execute_batch(
                    "ALTER TABLE pets ADD COLUMN revision INTEGER NOT NULL DEFAULT 0;",
                )?;
            }

            conn.execute("INSERT OR REPLACE INTO schema_version VALUES (2)", [])?;
            info!(from = version, to = 2, "migrated wellbeing schema");
        }

        Ok(())
    }
}

/// SQL schema for the wellbeing database
const SCHEMA_SQL: &str = r#"
-- Users own every other record; credentials live elsewhere
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    created_at INTEGER NOT NULL
);

-- Mood check-ins (immutable, many per day allowed)
CREATE TABLE IF NOT EXISTS mood_checkins (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    owner_id TEXT NOT NULL REFERENCES users(id),
    mood TEXT NOT NULL CHECK (mood IN ('happy', 'sad', 'neutral', 'excited', 'stressed')),
    recorded_at INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_checkin_owner ON mood_checkins(owner_id, recorded_at);

-- Free-text journal
CREATE TABLE IF NOT EXISTS journal_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    owner_id TEXT NOT NULL REFERENCES users(id),
    content TEXT NOT NULL,
    mood TEXT NOT NULL,
    written_at INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_journal_owner ON journal_entries(owner_id, written_at);

-- One pet per user
CREATE TABLE IF NOT EXISTS pets (
    owner_id TEXT PRIMARY KEY REFERENCES users(id),
    species TEXT NOT NULL,
    name TEXT NOT NULL,
    level INTEGER NOT NULL DEFAULT 1,
    xp INTEGER NOT NULL DEFAULT 0,
    hunger INTEGER NOT NULL DEFAULT 100,
    happiness INTEGER NOT NULL DEFAULT 100,
    energy INTEGER NOT NULL DEFAULT 100,
    evolution_stage INTEGER NOT NULL DEFAULT 1,
    updated_at INTEGER NOT NULL
);

-- Schema version
CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY);
INSERT OR IGNORE INTO schema_version VALUES (1);
"#;

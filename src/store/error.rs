use uuid::Uuid;

use crate::domain::JournalError;
use crate::progress::ProgressError;

/// Errors from the wellbeing store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error(transparent)]
    Journal(#[from] JournalError),

    #[error("Pet for {owner} was changed by another writer (expected revision {expected})")]
    Conflict { owner: Uuid, expected: i64 },

    #[error("Corrupt record in {table}: {detail}")]
    Corrupt { table: &'static str, detail: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl StoreError {
    pub(crate) fn corrupt(table: &'static str, detail: impl Into<String>) -> Self {
        Self::Corrupt {
            table,
            detail: detail.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Convert stored milliseconds back into a UTC timestamp
pub(crate) fn timestamp_from_ms(
    table: &'static str,
    ms: i64,
) -> StoreResult<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| StoreError::corrupt(table, format!("timestamp out of range: {ms}")))
}

pub(crate) fn uuid_from_str(table: &'static str, s: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(s).map_err(|e| StoreError::corrupt(table, format!("bad id {s}: {e}")))
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum journal entry length, counted in characters
pub const MAX_JOURNAL_CHARS: usize = 500;

/// Mood tag used when the writer does not pick one
pub const DEFAULT_JOURNAL_MOOD: &str = "📝";

/// Rejection reasons for a new journal entry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JournalError {
    #[error("Content cannot be empty")]
    Empty,

    #[error("Content must be {max} characters or less (got {len})")]
    TooLong { len: usize, max: usize },
}

/// A stored journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: i64,
    pub owner_id: Uuid,
    pub written_at: DateTime<Utc>,
    pub content: String,
    pub mood: String,
}

impl JournalEntry {
    /// Case-insensitive match on the content, or substring match on the mood tag
    pub fn matches(&self, term: &str) -> bool {
        self.content.to_lowercase().contains(&term.to_lowercase()) || self.mood.contains(term)
    }
}

/// A validated entry waiting to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJournalEntry {
    pub content: String,
    pub mood: String,
}

impl NewJournalEntry {
    pub fn new(content: impl Into<String>, mood: Option<String>) -> Result<Self, JournalError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(JournalError::Empty);
        }

        let len = content.chars().count();
        if len > MAX_JOURNAL_CHARS {
            return Err(JournalError::TooLong {
                len,
                max: MAX_JOURNAL_CHARS,
            });
        }

        let mood = mood
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_JOURNAL_MOOD.to_string());

        Ok(Self { content, mood })
    }
}

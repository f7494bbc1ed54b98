//! Core domain types for Mindful

mod journal;
mod mood;
mod pet;

pub use journal::{
    DEFAULT_JOURNAL_MOOD, JournalEntry, JournalError, MAX_JOURNAL_CHARS, NewJournalEntry,
};
pub use mood::{Mood, MoodCheckin, ParseMoodError};
pub use pet::{MAX_STAT, Pet, PetAction, Species};

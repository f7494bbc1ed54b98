//! Journal commands

use anyhow::Result;
use chrono::{Local, Utc};
use clap::Subcommand;

use mindful::{JournalEntry, NewJournalEntry};

use super::{Session, print_json};

/// Entries shown by `journal list` unless `--all` is given
const RECENT_ENTRIES: usize = 3;

#[derive(Subcommand)]
pub enum JournalCommands {
    /// Write a new entry (up to 500 characters)
    Add {
        content: String,

        /// Mood tag, e.g. an emoji (defaults to 📝)
        #[arg(long)]
        mood: Option<String>,
    },

    /// Show recent entries, newest first
    List {
        /// Show every entry
        #[arg(long)]
        all: bool,
    },

    /// Find entries by text or mood tag
    Search { term: String },
}

pub async fn journal_command(session: &Session, command: JournalCommands) -> Result<()> {
    let journals = session.store.journals();
    let owner = session.user.id;

    match command {
        JournalCommands::Add { content, mood } => {
            let entry = NewJournalEntry::new(content, mood)?;
            let saved = journals.add(owner, entry, Utc::now())?;
            if session.json {
                return print_json(&saved);
            }
            println!("{} Saved journal entry #{}", saved.mood, saved.id);
        }
        JournalCommands::List { all } => {
            let entries = journals.entries_for(owner)?;
            let limit = if all { entries.len() } else { RECENT_ENTRIES };
            print_entries(session, &entries[..entries.len().min(limit)], entries.len())?;
        }
        JournalCommands::Search { term } => {
            let entries = journals.search(owner, &term)?;
            print_entries(session, &entries, entries.len())?;
        }
    }

    Ok(())
}

fn print_entries(session: &Session, entries: &[JournalEntry], total: usize) -> Result<()> {
    if session.json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        println!("No journal entries found.");
        return Ok(());
    }

    println!("Journal ({} of {}):\n", entries.len(), total);
    for entry in entries {
        println!(
            "  {} {}",
            entry.mood,
            entry.written_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        );
        println!("    {}", entry.content);
        println!();
    }
    Ok(())
}

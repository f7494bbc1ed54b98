//! Mindful - a personal wellbeing tracker
//!
//! Log daily mood check-ins and journal entries, keep a check-in streak
//! alive, and look after a virtual pet that levels up as you play with it.
//!
//! ## Layout
//!
//! - [`domain`]: moods, journal entries, the pet and its actions
//! - [`progress`]: pure engines for check-in streaks and pet progression
//! - [`insights`]: dashboard summaries derived from mood history
//! - [`store`]: SQLite persistence for all records
//! - [`config`]: `~/.mindful/config.toml` loading and saving

pub mod config;
pub mod domain;
pub mod insights;
pub mod progress;
pub mod store;

pub use domain::*;

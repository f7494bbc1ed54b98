//! Persistence for users, mood check-ins, journal entries and pets
//!
//! Everything lives in one SQLite database, located by `Config::database_path`.
//! The engines in `progress` never touch storage; the stores here read the
//! history they need and write back the results.
//!
//! # Usage
//!
//! ```ignore
//! let config = Config::load(None)?;
//! let store = Store::with_path(&config.database_path())?;
//! let user = store.users().get_or_create("me")?;
//!
//! store.moods().record(user.id, Mood::Happy, Utc::now())?;
//! let history = store.moods().checkins_for(user.id)?;
//! let streak = compute_streak(&history, &Local::now());
//! ```

mod db;
mod error;
mod journals;
mod moods;
mod pets;
mod users;

pub use db::{SCHEMA_VERSION, WellbeingDb};
pub use error::{StoreError, StoreResult};
pub use journals::JournalStore;
pub use moods::MoodStore;
pub use pets::{PetStore, StoredPet};
pub use users::{User, UserStore};

use anyhow::Result;

/// Entry point to all record stores
///
/// Cheap to clone; every store shares the same connection.
#[derive(Clone)]
pub struct Store {
    db: WellbeingDb,
}

impl Store {
    /// Open the database at a custom path
    pub fn with_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self {
            db: WellbeingDb::open(path)?,
        })
    }

    pub fn users(&self) -> UserStore {
        UserStore::new(self.db.clone())
    }

    pub fn moods(&self) -> MoodStore {
        MoodStore::new(self.db.clone())
    }

    pub fn journals(&self) -> JournalStore {
        JournalStore::new(self.db.clone())
    }

    pub fn pets(&self) -> PetStore {
        PetStore::new(self.db.clone())
    }
}

//! Pet storage with optimistic concurrency
//!
//! Each pet row carries a `revision` counter. Writes only succeed against
//! the revision they read, so two concurrent actions cannot silently
//! overwrite each other.

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior};
use tracing::{debug, info};
use uuid::Uuid;

use super::db::WellbeingDb;
use super::error::{StoreError, StoreResult};
use crate::domain::{Pet, PetAction, Species};
use crate::progress::{PetEvent, ProgressError, Progression};

/// A pet together with the revision it was read at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPet {
    pub pet: Pet,
    pub revision: i64,
}

#[derive(Clone)]
pub struct PetStore {
    db: WellbeingDb,
}

impl PetStore {
    pub fn new(db: WellbeingDb) -> Self {
        Self { db }
    }

    /// Fetch a user's pet without creating one
    pub fn find(&self, owner_id: Uuid) -> StoreResult<Option<StoredPet>> {
        let conn = self.db.conn();
        fetch_pet(&conn, owner_id)
    }

    /// Fetch a user's pet, adopting a new one with the given defaults on first access
    pub fn get_or_create(
        &self,
        owner_id: Uuid,
        species: Species,
        name: &str,
    ) -> StoreResult<StoredPet> {
        let conn = self.db.conn();
        if let Some(existing) = fetch_pet(&conn, owner_id)? {
            return Ok(existing);
        }

        let pet = Pet::new(owner_id, species, name);
        conn.execute(
            r#"INSERT OR IGNORE INTO pets
               (owner_id, species, name, level, xp, hunger, happiness, energy, evolution_stage, revision, updated_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 0, ?10)"#,
            rusqlite::params![
                owner_id.to_string(),
                pet.species.as_str(),
                pet.name,
                pet.level,
                pet.xp,
                pet.hunger,
                pet.happiness,
                pet.energy,
                pet.evolution_stage,
                Utc::now().timestamp_millis(),
            ],
        )?;
        info!(%owner_id, species = pet.species.as_str(), name = %pet.name, "adopted pet");

        fetch_pet(&conn, owner_id)?
            .ok_or_else(|| StoreError::corrupt("pets", "pet vanished after insert"))
    }

    /// Replace a pet's state if nobody else wrote it since `expected_revision`.
    ///
    /// Returns the new revision.
    pub fn replace(&self, pet: &Pet, expected_revision: i64) -> StoreResult<i64> {
        let conn = self.db.conn();
        write_pet(&conn, pet, expected_revision)
    }

    /// Fetch, apply an action, and persist the result in one immediate transaction.
    ///
    /// A user without a pet gets `ProgressError::NotFound`; actions never adopt one.
    pub fn act(&self, owner_id: Uuid, action: PetAction) -> StoreResult<Progression> {
        let mut conn = self.db.conn();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let stored = fetch_pet(&tx, owner_id)?.ok_or(ProgressError::NotFound)?;
        let progression = stored.pet.apply(action)?;
        write_pet(&tx, &progression.pet, stored.revision)?;
        tx.commit()?;

        debug!(%owner_id, action = action.label(), "applied pet action");
        for event in &progression.events {
            match event {
                PetEvent::LevelUp { from, to } => info!(%owner_id, from, to, "pet leveled up"),
                PetEvent::Evolved { from, to } => info!(%owner_id, from, to, "pet evolved"),
            }
        }
        Ok(progression)
    }
}

fn fetch_pet(conn: &Connection, owner_id: Uuid) -> StoreResult<Option<StoredPet>> {
    let row = conn
        .query_row(
            r#"SELECT species, name, level, xp, hunger, happiness, energy, evolution_stage, revision
               FROM pets WHERE owner_id = ?1"#,
            [owner_id.to_string()],
            |r| {
                Ok((
                    r.get::<_, String>(0)?,
                    r.get::<_, String>(1)?,
                    r.get::<_, u32>(2)?,
                    r.get::<_, u32>(3)?,
                    r.get::<_, u8>(4)?,
                    r.get::<_, u8>(5)?,
                    r.get::<_, u8>(6)?,
                    r.get::<_, u32>(7)?,
                    r.get::<_, i64>(8)?,
                ))
            },
        )
        .optional()?;

    let Some((species, name, level, xp, hunger, happiness, energy, evolution_stage, revision)) =
        row
    else {
        return Ok(None);
    };

    let species = Species::from_str(&species)
        .ok_or_else(|| StoreError::corrupt("pets", format!("unknown species: {species}")))?;

    Ok(Some(StoredPet {
        pet: Pet {
            owner_id,
            species,
            name,
            level,
            xp,
            hunger,
            happiness,
            energy,
            evolution_stage,
        },
        revision,
    }))
}

fn write_pet(conn: &Connection, pet: &Pet, expected_revision: i64) -> StoreResult<i64> {
    let changed = conn.execute(
        r#"UPDATE pets SET
               species = ?2, name = ?3, level = ?4, xp = ?5, hunger = ?6, happiness = ?7,
               energy = ?8, evolution_stage = ?9, revision = revision + 1, updated_at = ?10
           WHERE owner_id = ?1 AND revision = ?11"#,
        rusqlite::params![
            pet.owner_id.to_string(),
            pet.species.as_str(),
            pet.name,
            pet.level,
            pet.xp,
            pet.hunger,
            pet.happiness,
            pet.energy,
            pet.evolution_stage,
            Utc::now().timestamp_millis(),
            expected_revision,
        ],
    )?;

    if changed == 0 {
        return Err(StoreError::Conflict {
            owner: pet.owner_id,
            expected: expected_revision,
        });
    }
    Ok(expected_revision + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::UserStore;

    fn setup() -> (PetStore, Uuid) {
        let db = WellbeingDb::open_in_memory().unwrap();
        let owner = UserStore::new(db.clone()).get_or_create("ana").unwrap();
        (PetStore::new(db), owner.id)
    }

    #[test]
    fn test_get_or_create_adopts_once() {
        let (pets, owner) = setup();
        assert!(pets.find(owner).unwrap().is_none());

        let first = pets.get_or_create(owner, Species::Fox, "Ember").unwrap();
        assert_eq!(first.pet.species, Species::Fox);
        assert_eq!(first.revision, 0);

        let again = pets.get_or_create(owner, Species::Cat, "Other").unwrap();
        assert_eq!(again.pet.name, "Ember");
    }

    #[test]
    fn test_act_without_pet_is_not_found() {
        let (pets, owner) = setup();
        let err = pets.act(owner, PetAction::Play).unwrap_err();
        assert!(matches!(err, StoreError::Progress(ProgressError::NotFound)));
        assert!(pets.find(owner).unwrap().is_none());
    }

    #[test]
    fn test_act_persists_and_bumps_revision() {
        let (pets, owner) = setup();
        pets.get_or_create(owner, Species::Cat, "Fluffy").unwrap();

        let progression = pets.act(owner, PetAction::Play).unwrap();
        assert_eq!(progression.pet.xp, 10);

        let stored = pets.find(owner).unwrap().unwrap();
        assert_eq!(stored.pet, progression.pet);
        assert_eq!(stored.revision, 1);
    }

    #[test]
    fn test_stale_replace_conflicts() {
        let (pets, owner) = setup();
        let stored = pets.get_or_create(owner, Species::Cat, "Fluffy").unwrap();

        let fed = stored.pet.apply(PetAction::Feed).unwrap().pet;
        assert_eq!(pets.replace(&fed, stored.revision).unwrap(), 1);

        let err = pets.replace(&fed, stored.revision).unwrap_err();
        assert!(matches!(err, StoreError::Conflict { expected: 0, .. }));
    }

    #[test]
    fn test_invalid_action_leaves_pet_untouched() {
        let (pets, owner) = setup();
        let before = pets.get_or_create(owner, Species::Cat, "Fluffy").unwrap();

        let err = pets.act(owner, PetAction::GrantXp(-1)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Progress(ProgressError::InvalidInput(_))
        ));
        assert_eq!(pets.find(owner).unwrap().unwrap(), before);
    }
}

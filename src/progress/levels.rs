//! Pet XP, level and evolution system
//!
//! Every action adjusts the pet's stats and may grant xp. Xp is then
//! resolved into level-ups, and every fifth level evolves the pet.

use serde::{Deserialize, Serialize};

use super::error::ProgressError;
use crate::domain::{MAX_STAT, Pet, PetAction};

/// Xp needed to advance one level
pub const XP_PER_LEVEL: u32 = 100;

/// The pet evolves each time its level becomes a multiple of this
pub const EVOLUTION_INTERVAL: u32 = 5;

/// Stat changes for each action
pub struct ActionRewards;

impl ActionRewards {
    pub const PLAY_XP: u32 = 10;
    pub const PLAY_HAPPINESS: i16 = 10;
    pub const PLAY_ENERGY: i16 = -15;

    pub const FEED_HUNGER: i16 = 20;
    pub const FEED_HAPPINESS: i16 = 5;
}

/// Something noteworthy that happened while applying an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum PetEvent {
    LevelUp { from: u32, to: u32 },
    Evolved { from: u32, to: u32 },
}

/// The pet after an action, plus the events it triggered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub pet: Pet,
    pub events: Vec<PetEvent>,
}

impl Progression {
    pub fn leveled_up(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, PetEvent::LevelUp { .. }))
    }

    pub fn evolved(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, PetEvent::Evolved { .. }))
    }
}

/// Display name for an evolution stage
pub fn stage_name(stage: u32) -> &'static str {
    match stage {
        0 | 1 => "Baby",
        2 => "Evolved",
        3 => "Ascended",
        _ => "Legendary",
    }
}

/// Add a signed delta to a stat, saturating at 0 and `MAX_STAT`
fn adjust(stat: u8, delta: i16) -> u8 {
    (i16::from(stat) + delta).clamp(0, i16::from(MAX_STAT)) as u8
}

impl Pet {
    /// Apply an action and return the resulting pet.
    ///
    /// The receiver is left untouched. Invalid input is rejected before any
    /// change, so a failed call never yields a partially updated pet.
    pub fn apply(&self, action: PetAction) -> Result<Progression, ProgressError> {
        let xp_gain = match action {
            PetAction::GrantXp(amount) if amount < 0 => {
                return Err(ProgressError::InvalidInput(format!(
                    "xp amount must not be negative (got {amount})"
                )));
            }
            PetAction::GrantXp(amount) => u32::try_from(amount).map_err(|_| {
                ProgressError::InvalidInput(format!("xp amount too large (got {amount})"))
            })?,
            PetAction::Play => ActionRewards::PLAY_XP,
            _ => 0,
        };

        let mut pet = self.clone();
        match action {
            PetAction::Play => {
                pet.happiness = adjust(pet.happiness, ActionRewards::PLAY_HAPPINESS);
                pet.energy = adjust(pet.energy, ActionRewards::PLAY_ENERGY);
            }
            PetAction::Feed => {
                pet.hunger = adjust(pet.hunger, ActionRewards::FEED_HUNGER);
                pet.happiness = adjust(pet.happiness, ActionRewards::FEED_HAPPINESS);
            }
            PetAction::Sleep => {
                pet.energy = MAX_STAT;
            }
            PetAction::GrantXp(_) => {}
        }

        let events = pet.resolve_levels(u64::from(pet.xp) + u64::from(xp_gain));
        Ok(Progression { pet, events })
    }

    /// Convert banked xp into levels, keeping less than one level's worth.
    ///
    /// Same outcome as taking 100 xp per level-up one at a time: the stage
    /// rises once for every multiple of `EVOLUTION_INTERVAL` passed.
    fn resolve_levels(&mut self, banked: u64) -> Vec<PetEvent> {
        let old_level = self.level;
        let old_stage = self.evolution_stage;

        let per_level = u64::from(XP_PER_LEVEL);
        let new_level = u64::from(old_level) + banked / per_level;
        self.level = u32::try_from(new_level).unwrap_or(u32::MAX);
        self.xp = (banked % per_level) as u32;

        let evolutions = self.level / EVOLUTION_INTERVAL - old_level / EVOLUTION_INTERVAL;
        self.evolution_stage = self.evolution_stage.saturating_add(evolutions);

        let mut events = Vec::new();
        if self.level > old_level {
            events.push(PetEvent::LevelUp {
                from: old_level,
                to: self.level,
            });
        }
        if self.evolution_stage > old_stage {
            events.push(PetEvent::Evolved {
                from: old_stage,
                to: self.evolution_stage,
            });
        }
        events
    }

    /// Progress toward the next level (0.0 - 1.0)
    pub fn progress_to_next(&self) -> f32 {
        (self.xp.min(XP_PER_LEVEL) as f32) / (XP_PER_LEVEL as f32)
    }

    pub fn stage_name(&self) -> &'static str {
        stage_name(self.evolution_stage)
    }
}

/// Apply an action to a pet that may not exist.
///
/// A missing pet is reported as `NotFound`; creating one is left to the
/// caller's read path.
pub fn apply_pet_action(pet: Option<&Pet>, action: PetAction) -> Result<Pet, ProgressError> {
    let pet = pet.ok_or(ProgressError::NotFound)?;
    Ok(pet.apply(action)?.pet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Species;
    use uuid::Uuid;

    fn pet() -> Pet {
        Pet::new(Uuid::nil(), Species::Cat, "Fluffy")
    }

    #[test]
    fn test_play_adjusts_stats() {
        let result = pet().apply(PetAction::Play).unwrap();
        assert_eq!(result.pet.xp, 10);
        assert_eq!(result.pet.happiness, 100);
        assert_eq!(result.pet.energy, 85);
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_play_energy_floors_at_zero() {
        let mut tired = pet();
        tired.energy = 10;
        tired.happiness = 40;
        let result = tired.apply(PetAction::Play).unwrap();
        assert_eq!(result.pet.energy, 0);
        assert_eq!(result.pet.happiness, 50);
    }

    #[test]
    fn test_feed_caps_at_max() {
        let mut hungry = pet();
        hungry.hunger = 90;
        hungry.happiness = 97;
        let result = hungry.apply(PetAction::Feed).unwrap();
        assert_eq!(result.pet.hunger, 100);
        assert_eq!(result.pet.happiness, 100);
        assert_eq!(result.pet.xp, 0);
    }

    #[test]
    fn test_sleep_restores_energy_only() {
        let mut tired = pet();
        tired.energy = 3;
        tired.hunger = 40;
        tired.xp = 55;
        let result = tired.apply(PetAction::Sleep).unwrap();
        assert_eq!(result.pet.energy, 100);
        assert_eq!(result.pet.hunger, 40);
        assert_eq!(result.pet.xp, 55);
        assert_eq!(result.pet.level, 1);
    }

    #[test]
    fn test_play_crosses_level_boundary() {
        let mut almost = pet();
        almost.xp = 95;
        let result = almost.apply(PetAction::Play).unwrap();
        assert_eq!(result.pet.level, 2);
        assert_eq!(result.pet.xp, 5);
        assert_eq!(result.pet.evolution_stage, 1);
        assert_eq!(result.events, vec![PetEvent::LevelUp { from: 1, to: 2 }]);
    }

    #[test]
    fn test_large_grant_levels_up_repeatedly() {
        let mut p = pet();
        p.level = 4;
        p.xp = 90;
        let result = p.apply(PetAction::GrantXp(120)).unwrap();
        assert_eq!(result.pet.level, 6);
        assert_eq!(result.pet.xp, 10);
        assert_eq!(result.pet.evolution_stage, 2);
        assert!(result.leveled_up());
        assert!(result.evolved());
    }

    #[test]
    fn test_max_grant_keeps_existing_xp() {
        let mut p = pet();
        p.xp = 99;
        let result = p.apply(PetAction::GrantXp(i64::from(u32::MAX))).unwrap();
        assert_eq!(result.pet.level, 42_949_674);
        assert_eq!(result.pet.xp, 94);
        assert_eq!(result.pet.evolution_stage, 1 + 42_949_674 / 5);
    }

    #[test]
    fn test_negative_grant_rejected() {
        let err = pet().apply(PetAction::GrantXp(-5)).unwrap_err();
        assert!(matches!(err, ProgressError::InvalidInput(_)));
    }

    #[test]
    fn test_oversized_grant_rejected() {
        let err = pet().apply(PetAction::GrantXp(i64::MAX)).unwrap_err();
        assert!(matches!(err, ProgressError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_pet_is_not_found() {
        assert_eq!(
            apply_pet_action(None, PetAction::Play),
            Err(ProgressError::NotFound)
        );
        let fed = apply_pet_action(Some(&pet()), PetAction::Feed).unwrap();
        assert_eq!(fed.level, 1);
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(stage_name(1), "Baby");
        assert_eq!(stage_name(2), "Evolved");
        assert_eq!(stage_name(9), "Legendary");
    }
}

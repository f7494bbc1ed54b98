//! Pet progression across sequences of actions

use mindful::progress::{PetEvent, ProgressError, XP_PER_LEVEL, apply_pet_action};
use mindful::PetAction;

use crate::common::pet_at;

#[test]
fn test_play_from_95_xp_levels_up() {
    let result = pet_at(1, 95).apply(PetAction::Play).unwrap();
    assert_eq!((result.pet.level, result.pet.xp), (2, 5));
    assert_eq!(result.events, vec![PetEvent::LevelUp { from: 1, to: 2 }]);
}

#[test]
fn test_grant_crossing_fifth_level_evolves() {
    let result = pet_at(4, 90).apply(PetAction::GrantXp(120)).unwrap();
    assert_eq!(result.pet.level, 6);
    assert_eq!(result.pet.xp, 10);
    assert_eq!(result.pet.evolution_stage, 2);
    assert_eq!(
        result.events,
        vec![
            PetEvent::LevelUp { from: 4, to: 6 },
            PetEvent::Evolved { from: 1, to: 2 },
        ]
    );
}

#[test]
fn test_one_grant_crossing_two_evolutions() {
    let result = pet_at(4, 0).apply(PetAction::GrantXp(700)).unwrap();
    assert_eq!(result.pet.level, 11);
    assert_eq!(result.pet.xp, 0);
    assert_eq!(result.pet.evolution_stage, 3);
    assert_eq!(
        result.events,
        vec![
            PetEvent::LevelUp { from: 4, to: 11 },
            PetEvent::Evolved { from: 1, to: 3 },
        ]
    );
}

#[test]
fn test_largest_grant_keeps_banked_xp() {
    let pet = pet_at(1, 99)
        .apply(PetAction::GrantXp(i64::from(u32::MAX)))
        .unwrap()
        .pet;
    let total = 99 + u64::from(u32::MAX);
    assert_eq!(u64::from(pet.level), 1 + total / 100);
    assert_eq!(pet.level, 42_949_674);
    assert_eq!(pet.xp, 94);
}

#[test]
fn test_evolution_only_on_multiples_of_five() {
    let mut pet = pet_at(1, 0);
    for _ in 0..24 {
        let before = pet.evolution_stage;
        pet = pet.apply(PetAction::GrantXp(100)).unwrap().pet;
        let expected = if pet.level % 5 == 0 { before + 1 } else { before };
        assert_eq!(pet.evolution_stage, expected, "at level {}", pet.level);
    }
    assert_eq!(pet.level, 25);
    assert_eq!(pet.evolution_stage, 6);
}

#[test]
fn test_grant_level_arithmetic() {
    for (xp, amount) in [
        (0u32, 0i64),
        (0, 99),
        (50, 50),
        (99, 1),
        (10, 1_000),
        (75, 12_345),
        (42, i64::from(u32::MAX)),
    ] {
        let start = pet_at(3, xp);
        let pet = start.apply(PetAction::GrantXp(amount)).unwrap().pet;
        let total = u64::from(xp) + amount as u64;
        assert_eq!(
            u64::from(pet.level),
            3 + total / u64::from(XP_PER_LEVEL),
            "xp {xp} + {amount}"
        );
        assert!(pet.xp < XP_PER_LEVEL);
        assert_eq!(u64::from(pet.xp), total % u64::from(XP_PER_LEVEL));
    }
}

#[test]
fn test_sleep_changes_nothing_but_energy() {
    let mut pet = pet_at(7, 42);
    pet.energy = 12;
    pet.hunger = 33;
    pet.happiness = 61;
    pet.evolution_stage = 2;

    let rested = pet.apply(PetAction::Sleep).unwrap().pet;
    assert_eq!(rested.energy, 100);
    pet.energy = 100;
    assert_eq!(rested, pet);
}

#[test]
fn test_stats_stay_in_range_over_many_actions() {
    let mut pet = pet_at(1, 0);
    let actions = [PetAction::Play, PetAction::Play, PetAction::Feed, PetAction::Play];
    for action in actions.iter().cycle().take(200) {
        pet = pet.apply(*action).unwrap().pet;
        assert!(pet.hunger <= 100 && pet.happiness <= 100 && pet.energy <= 100);
    }
    assert_eq!(pet.energy, 0);
    assert_eq!(pet.happiness, 100);
}

#[test]
fn test_rejected_actions_leave_pet_untouched() {
    let pet = pet_at(2, 30);
    assert!(matches!(
        pet.apply(PetAction::GrantXp(-1)),
        Err(ProgressError::InvalidInput(_))
    ));
    assert_eq!(pet, pet_at(2, 30));
    assert_eq!(
        apply_pet_action(None, PetAction::Sleep),
        Err(ProgressError::NotFound)
    );
}

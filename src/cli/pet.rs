//! Pet commands

use anyhow::{Result, bail};
use clap::Subcommand;
use serde_json::json;

use mindful::progress::{PetEvent, ProgressError, XP_PER_LEVEL, stage_name};
use mindful::store::StoreError;
use mindful::{Pet, PetAction};

use super::{Session, print_json, progress_bar};

#[derive(Subcommand)]
pub enum PetCommands {
    /// Show your pet (default)
    Show,
    /// Play: +10 xp, +10 happiness, -15 energy
    Play,
    /// Feed: +20 hunger, +5 happiness
    Feed,
    /// Sleep: energy back to 100
    Sleep,
    /// Grant xp directly
    Xp {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

pub async fn pet_command(session: &Session, command: Option<PetCommands>) -> Result<()> {
    let action = match command.unwrap_or(PetCommands::Show) {
        PetCommands::Show => return show_pet(session),
        PetCommands::Play => PetAction::Play,
        PetCommands::Feed => PetAction::Feed,
        PetCommands::Sleep => PetAction::Sleep,
        PetCommands::Xp { amount } => PetAction::GrantXp(amount),
    };

    let progression = match session.store.pets().act(session.user.id, action) {
        Ok(progression) => progression,
        Err(StoreError::Progress(ProgressError::NotFound)) => {
            bail!("You don't have a pet yet. Run `mindful pet` to adopt one.")
        }
        Err(e) => return Err(e.into()),
    };

    if session.json {
        return print_json(&progression);
    }

    let pet = &progression.pet;
    match action {
        PetAction::Play => println!("🎾 You played with {}!", pet.name),
        PetAction::Feed => println!("🍖 {} enjoyed the meal.", pet.name),
        PetAction::Sleep => println!("💤 {} had a good nap.", pet.name),
        PetAction::GrantXp(n) => println!("✨ {} gained {n} xp.", pet.name),
    }
    for event in &progression.events {
        match event {
            PetEvent::LevelUp { to, .. } => println!("⬆️  {} reached level {to}!", pet.name),
            PetEvent::Evolved { to, .. } => {
                println!("🌟 {} evolved into its {} form!", pet.name, stage_name(*to))
            }
        }
    }
    println!();
    print_pet(pet);
    Ok(())
}

fn show_pet(session: &Session) -> Result<()> {
    let defaults = &session.config.settings.pet;
    let stored = session
        .store
        .pets()
        .get_or_create(session.user.id, defaults.species, &defaults.name)?;

    if session.json {
        return print_json(&json!({ "pet": stored.pet, "stage": stored.pet.stage_name() }));
    }

    print_pet(&stored.pet);
    Ok(())
}

fn print_pet(pet: &Pet) {
    println!("🐾 {} the {} ({})", pet.name, pet.species, pet.stage_name());
    println!("   Level:     {}", pet.level);
    println!(
        "   XP:        {} {}/{}",
        progress_bar(pet.progress_to_next(), 20),
        pet.xp,
        XP_PER_LEVEL
    );
    println!("   Hunger:    {}/100", pet.hunger);
    println!("   Happiness: {}/100", pet.happiness);
    println!("   Energy:    {}/100", pet.energy);
}

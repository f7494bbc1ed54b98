use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mindful::Mood;

mod cli;

#[derive(Parser)]
#[command(name = "mindful")]
#[command(about = "Mindful - mood check-ins, a journal, and a pet that grows with you")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.mindful/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Act as this user (defaults to settings.default_user)
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default ~/.mindful/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Record how you feel right now (happy, sad, neutral, excited, stressed)
    Checkin { mood: Mood },

    /// Show your mood history, newest first
    Moods {
        /// Number of check-ins to show
        #[arg(long, default_value = "5")]
        limit: usize,

        /// Show the full history
        #[arg(long)]
        all: bool,
    },

    /// Show your current check-in streak
    Streak,

    /// Write and read journal entries
    Journal {
        #[command(subcommand)]
        command: cli::journal::JournalCommands,
    },

    /// Visit your pet (adopts one on first visit)
    Pet {
        #[command(subcommand)]
        command: Option<cli::pet::PetCommands>,
    },

    /// Streak, badges, mood distribution and weekly reflection
    Dashboard,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so --json output stays machine readable
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Every command except init needs the config, database and user
    let session = || cli::Session::open(cli.config.as_deref(), cli.user.clone(), cli.json);

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config.as_deref(), force).await?;
        }
        Some(Commands::Checkin { mood }) => {
            cli::mood::checkin_command(&session()?, mood).await?;
        }
        Some(Commands::Moods { limit, all }) => {
            let limit = if all { None } else { Some(limit) };
            cli::mood::moods_command(&session()?, limit).await?;
        }
        Some(Commands::Streak) => {
            cli::mood::streak_command(&session()?).await?;
        }
        Some(Commands::Journal { command }) => {
            cli::journal::journal_command(&session()?, command).await?;
        }
        Some(Commands::Pet { command }) => {
            cli::pet::pet_command(&session()?, command).await?;
        }
        Some(Commands::Dashboard) | None => {
            cli::dashboard::dashboard_command(&session()?).await?;
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use groupwise::config::{ConfigManager, Settings};
use groupwise::config_commands::{ConfigInitCommand, ConfigPathCommand, ConfigShowCommand};
use groupwise::interactive::InteractiveCommand;
use groupwise::logging;
use groupwise::rotate::{RosterCommand, RotateCommand};
use groupwise::shuffle::ShuffleCommand;
use groupwise::Mode;

#[derive(Parser)]
#[command(name = "groupwise")]
#[command(author = "groupwise contributors")]
#[command(version)]
#[command(about = "groupwise - shuffle groups and rotate team skills", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,

    #[arg(long, help = "Path to a settings file", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Partition participants into random groups")]
    Shuffle {
        #[arg(short, long, help = "Number of participants")]
        participants: Option<usize>,

        #[arg(short, long, help = "Desired group size")]
        group_size: Option<usize>,

        #[arg(short, long, default_value_t = 1, help = "Number of rounds to run")]
        rounds: usize,

        #[arg(long, help = "Seed for a reproducible shuffle")]
        seed: Option<u64>,

        #[arg(long, help = "Print rounds as JSON")]
        json: bool,
    },

    #[command(about = "Rotate skill levels across the team roster")]
    Rotate {
        #[arg(short, long, help = "Use the five-member extended roster")]
        extended: bool,

        #[arg(short, long, default_value_t = 1, help = "Number of rotation steps")]
        steps: usize,

        #[arg(long, help = "Print the assignment as JSON")]
        json: bool,
    },

    #[command(about = "Show the roster and initial skill assignment")]
    Roster {
        #[arg(short, long, help = "Use the five-member extended roster")]
        extended: bool,
    },

    #[command(about = "Start an interactive session")]
    Interactive {
        #[arg(long, help = "Seed for reproducible shuffles")]
        seed: Option<u64>,
    },

    #[command(about = "Manage groupwise settings")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Print the effective settings")]
    Show,
    #[command(about = "Print the settings file location")]
    Path,
    #[command(about = "Write a default settings file")]
    Init {
        #[arg(long, help = "Overwrite an existing settings file")]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        eprintln!("{}", "Verbose mode enabled".dimmed());
    }
    // A second subscriber cannot be installed; keep going without logs in that case
    let _ = logging::init_logging(cli.verbose);

    let manager = ConfigManager::resolve(cli.config.as_deref());

    match cli.command {
        Commands::Shuffle {
            participants,
            group_size,
            rounds,
            seed,
            json,
        } => {
            let settings = manager.load()?;
            ShuffleCommand::new(
                cli.verbose,
                participants.unwrap_or(settings.participants),
                group_size.unwrap_or(settings.group_size),
            )
            .with_rounds(rounds)
            .with_seed(seed)
            .with_json(json)
            .execute()?;
        }
        Commands::Rotate {
            extended,
            steps,
            json,
        } => {
            let settings = manager.load()?;
            RotateCommand::new(
                cli.verbose,
                settings.roster_source(),
                mode_for(extended, &settings),
            )
            .with_steps(steps)
            .with_json(json)
            .execute()?;
        }
        Commands::Roster { extended } => {
            let settings = manager.load()?;
            RosterCommand::new(settings.roster_source(), mode_for(extended, &settings))
                .execute()?;
        }
        Commands::Interactive { seed } => {
            let settings = manager.load()?;
            InteractiveCommand::new(cli.verbose, settings, seed).execute()?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => ConfigShowCommand::new(manager).execute()?,
            ConfigAction::Path => ConfigPathCommand::new(manager).execute()?,
            ConfigAction::Init { force } => ConfigInitCommand::new(manager, force).execute()?,
        },
    }

    Ok(())
}

/// The `--extended` flag wins; otherwise the settings file decides.
fn mode_for(extended: bool, settings: &Settings) -> Mode {
    if extended {
        Mode::Extended
    } else {
        settings.mode()
    }
}

//! Interactive menu that drives a shuffle session and a rotation session together.

use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::error::{GroupwiseError, Result};
use crate::logging;
use crate::rotate::format_assignment;
use crate::session::{RotationSession, ShuffleSession};
use crate::shuffle::{format_round, session_rng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Shuffle,
    Rotate,
    ToggleMode,
    SetParticipants,
    SetGroupSize,
    ShowHistory,
    ClearHistory,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 8] = [
        MenuAction::Shuffle,
        MenuAction::Rotate,
        MenuAction::ToggleMode,
        MenuAction::SetParticipants,
        MenuAction::SetGroupSize,
        MenuAction::ShowHistory,
        MenuAction::ClearHistory,
        MenuAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Shuffle => "Shuffle groups",
            MenuAction::Rotate => "Rotate skills",
            MenuAction::ToggleMode => "Toggle extended mode",
            MenuAction::SetParticipants => "Set participant count",
            MenuAction::SetGroupSize => "Set group size",
            MenuAction::ShowHistory => "Show shuffle history",
            MenuAction::ClearHistory => "Clear shuffle history",
            MenuAction::Quit => "Quit",
        }
    }
}

pub struct InteractiveCommand {
    verbose: bool,
    settings: Settings,
    seed: Option<u64>,
}

impl InteractiveCommand {
    pub fn new(verbose: bool, settings: Settings, seed: Option<u64>) -> Self {
        Self {
            verbose,
            settings,
            seed,
        }
    }

    pub fn execute(&self) -> Result<()> {
        let mut rng = session_rng(self.seed);
        let mut shuffler = ShuffleSession::new(
            self.settings.participants,
            self.settings.group_size,
            self.settings.history_limit,
        );
        let mut rotator =
            RotationSession::new(self.settings.roster_source(), self.settings.mode());

        println!("{}", "🎲 groupwise interactive session".blue().bold());
        println!();

        let labels: Vec<&str> = MenuAction::ALL.iter().map(MenuAction::label).collect();
        loop {
            println!(
                "{} {} participants · groups of {} · {}",
                "ℹ".blue(),
                shuffler.participants(),
                shuffler.group_size(),
                rotator.mode().label()
            );

            let selection = Select::new()
                .with_prompt("Choose an action")
                .items(&labels)
                .default(0)
                .interact()
                .map_err(|e| GroupwiseError::Other(anyhow::anyhow!("Selection failed: {}", e)))?;

            match MenuAction::ALL[selection] {
                MenuAction::Shuffle => self.shuffle(&mut shuffler, &mut rng)?,
                MenuAction::Rotate => self.rotate(&mut rotator)?,
                MenuAction::ToggleMode => {
                    rotator.toggle_mode();
                    print!("{}", format_assignment(&rotator));
                }
                MenuAction::SetParticipants => {
                    let value: usize = Input::new()
                        .with_prompt("Participants")
                        .default(shuffler.participants())
                        .interact_text()?;
                    shuffler.set_participants(value);
                }
                MenuAction::SetGroupSize => {
                    let (min, max) = shuffler.group_size_bounds();
                    let value: usize = Input::new()
                        .with_prompt(format!("Group size ({min}-{max})"))
                        .default(shuffler.group_size())
                        .interact_text()?;
                    shuffler.set_group_size(value);
                }
                MenuAction::ShowHistory => Self::show_history(&shuffler),
                MenuAction::ClearHistory => Self::clear_history(&mut shuffler)?,
                MenuAction::Quit => break,
            }
            println!();
        }

        Ok(())
    }

    fn shuffle(&self, shuffler: &mut ShuffleSession, rng: &mut StdRng) -> Result<()> {
        let started = Instant::now();
        let round = shuffler.shuffle(rng)?;
        print!("{}", format_round(round));
        if self.verbose {
            logging::log_performance("shuffle", started.elapsed().as_millis() as u64);
        }
        Ok(())
    }

    fn rotate(&self, rotator: &mut RotationSession) -> Result<()> {
        let pending = rotator.begin_rotation()?;

        let delay = Duration::from_millis(self.settings.rotation_delay_ms);
        if !delay.is_zero() {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message("Rotating...");
            spinner.enable_steady_tick(Duration::from_millis(40));
            thread::sleep(delay);
            spinner.finish_and_clear();
        }

        rotator.commit(pending)?;
        print!("{}", format_assignment(rotator));
        Ok(())
    }

    fn show_history(shuffler: &ShuffleSession) {
        let history = shuffler.history();
        if history.is_empty() {
            println!("{}", "No rounds yet".dimmed());
            return;
        }
        for round in history.iter() {
            print!("{}", format_round(round));
        }
    }

    fn clear_history(shuffler: &mut ShuffleSession) -> Result<()> {
        if shuffler.history().is_empty() {
            println!("{}", "History is already empty".dimmed());
            return Ok(());
        }

        let confirm = Confirm::new()
            .with_prompt(format!(
                "Clear all {} round(s)? This cannot be undone",
                shuffler.history().len()
            ))
            .default(false)
            .interact()
            .map_err(|e| GroupwiseError::Other(anyhow::anyhow!("Confirmation failed: {}", e)))?;

        if confirm {
            let dropped = shuffler.clear_history();
            println!("{} Cleared {} round(s)", "✓".green(), dropped);
        } else {
            println!("{} History kept", "→".dimmed());
        }
        Ok(())
    }
}

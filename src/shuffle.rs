//! The `shuffle` command.
//!
//! Runs one or more partition rounds and prints them newest first, either as
//! text or as JSON.

use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::partition::MAX_PARTICIPANTS;
use crate::error::{GroupwiseError, Result};
use crate::round::ShuffleRound;
use crate::session::ShuffleSession;

/// Builds the generator for a session: seeded when asked, otherwise from OS entropy.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Renders a round as a header line followed by one line per group.
pub fn format_round(round: &ShuffleRound) -> String {
    let mut out = format!(
        "{} Round {} · {} participants · groups of {} · {}\n",
        "→".green(),
        round.number(),
        round.participant_count(),
        round.group_size(),
        round
            .timestamp()
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .dimmed()
    );
    for (number, group) in round.groups().iter().enumerate() {
        let members = group
            .members
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "  {} Group {}: {}\n",
            "•".blue(),
            number + 1,
            members.cyan()
        ));
    }
    out
}

pub struct ShuffleCommand {
    verbose: bool,
    participants: usize,
    group_size: usize,
    rounds: usize,
    seed: Option<u64>,
    json: bool,
}

impl ShuffleCommand {
    pub fn new(verbose: bool, participants: usize, group_size: usize) -> Self {
        Self {
            verbose,
            participants,
            group_size,
            rounds: 1,
            seed: None,
            json: false,
        }
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds.max(1);
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Runs the rounds and returns them newest first without printing.
    pub fn run(&self) -> Result<Vec<ShuffleRound>> {
        if self.participants == 0 || self.participants > MAX_PARTICIPANTS {
            return Err(GroupwiseError::invalid_participant_count(self.participants));
        }
        if self.group_size == 0 {
            return Err(GroupwiseError::invalid_group_size(self.group_size));
        }

        let mut rng = session_rng(self.seed);
        let mut session = ShuffleSession::new(self.participants, self.group_size, None);
        for _ in 0..self.rounds {
            session.shuffle(&mut rng)?;
        }

        Ok(session.history().iter().cloned().collect())
    }

    pub fn execute(&self) -> Result<()> {
        let rounds = self.run()?;

        if self.json {
            let json = serde_json::to_string_pretty(&rounds)
                .map_err(|e| anyhow::anyhow!("Failed to serialize rounds: {}", e))?;
            println!("{json}");
            return Ok(());
        }

        if self.verbose {
            if let Some(seed) = self.seed {
                eprintln!("{} Using seed {}", "ℹ".blue(), seed);
            }
        }

        for round in &rounds {
            print!("{}", format_round(round));
        }

        Ok(())
    }
}

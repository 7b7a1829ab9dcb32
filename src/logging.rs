use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::skills::{Mode, SkillLevel};
use crate::round::ShuffleRound;

/// Initialize structured logging based on verbosity level
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("groupwise=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log a completed shuffle round
pub fn log_shuffle_round(round: &ShuffleRound) {
    let sizes: Vec<usize> = round.groups().iter().map(|g| g.len()).collect();
    tracing::info!(
        round = %round.id(),
        number = round.number(),
        participants = round.participant_count(),
        group_size = round.group_size(),
        requested_group_size = round.requested_group_size(),
        groups = round.groups().len(),
        sizes = ?sizes,
        "Shuffle round created"
    );
}

/// Log a committed rotation
pub fn log_rotation(mode: Mode, skills: &[SkillLevel]) {
    let labels: Vec<&str> = skills.iter().map(SkillLevel::label).collect();
    tracing::debug!(mode = mode.label(), skills = ?labels, "Skills rotated");
}

/// Log a mode transition
pub fn log_mode_change(from: Mode, to: Mode) {
    tracing::info!(from = from.label(), to = to.label(), "Mode changed");
}

/// Log a history clear
pub fn log_history_cleared(rounds: usize) {
    tracing::info!(rounds = rounds, "Shuffle history cleared");
}

/// Log where settings were loaded from
pub fn log_config_loaded(path: Option<&Path>, from_file: bool) {
    match path {
        Some(path) => tracing::debug!(
            path = %path.display(),
            from_file = from_file,
            "Settings resolved"
        ),
        None => tracing::debug!("Using built-in settings"),
    }
}

/// Log performance metrics
pub fn log_performance(operation: &str, duration_ms: u64) {
    tracing::debug!(
        operation = operation,
        duration_ms = duration_ms,
        "Operation performance"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{fixed_timestamp, seeded_rng};

    #[test]
    fn test_init_logging_verbose() {
        // Fails if a subscriber is already installed, which is fine here
        let _ = init_logging(true);
    }

    #[test]
    fn test_init_logging_normal() {
        let _ = init_logging(false);
    }

    #[test]
    fn test_logging_functions() {
        let round = ShuffleRound::create(1, 5, 2, fixed_timestamp(), &mut seeded_rng(1)).unwrap();
        log_shuffle_round(&round);
        log_rotation(Mode::Split, &[SkillLevel::Advanced, SkillLevel::Beginner]);
        log_mode_change(Mode::Split, Mode::Extended);
        log_history_cleared(3);
        log_config_loaded(Some(Path::new("/tmp/settings.json")), false);
        log_config_loaded(None, false);
        log_performance("partition", 1);
    }
}

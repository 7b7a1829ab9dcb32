//! Configuration commands for groupwise.
//!
//! This module implements the config subcommands: show, path, and init.

use colored::Colorize;

use crate::config::{ConfigManager, ConfigSource};
use crate::error::{GroupwiseError, Result};

/// Print the effective settings as JSON
pub struct ConfigShowCommand {
    manager: ConfigManager,
}

impl ConfigShowCommand {
    pub fn new(manager: ConfigManager) -> Self {
        Self { manager }
    }

    pub fn execute(&self) -> Result<()> {
        let settings = self.manager.load()?;
        let json = serde_json::to_string_pretty(&settings)
            .map_err(|e| GroupwiseError::Other(anyhow::anyhow!("Failed to render settings: {}", e)))?;
        println!("{json}");
        Ok(())
    }
}

/// Print where settings are read from
pub struct ConfigPathCommand {
    manager: ConfigManager,
}

impl ConfigPathCommand {
    pub fn new(manager: ConfigManager) -> Self {
        Self { manager }
    }

    pub fn describe(&self) -> String {
        match self.manager.source() {
            ConfigSource::Flag(path) => format!("{} (from --config)", path.display()),
            ConfigSource::Env(path) => format!("{} (from environment)", path.display()),
            ConfigSource::Default(path) => {
                let state = if path.exists() { "default" } else { "default, not created" };
                format!("{} ({state})", path.display())
            }
            ConfigSource::BuiltIn => "<built-in defaults>".to_string(),
        }
    }

    pub fn execute(&self) -> Result<()> {
        println!("{}", self.describe());
        Ok(())
    }
}

/// Write a default settings file
pub struct ConfigInitCommand {
    manager: ConfigManager,
    force: bool,
}

impl ConfigInitCommand {
    pub fn new(manager: ConfigManager, force: bool) -> Self {
        Self { manager, force }
    }

    pub fn execute(&self) -> Result<()> {
        let path = self.manager.init(self.force)?;
        println!(
            "{} Wrote default settings to {}",
            "✓".green(),
            path.display().to_string().cyan()
        );
        Ok(())
    }
}

use std::collections::HashSet;
use std::fmt;

use super::settings::{Settings, MAX_ROTATION_DELAY_MS};
use crate::core::partition::MAX_PARTICIPANTS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings, collecting every problem rather than stopping at the first
    pub fn validate(settings: &Settings) -> ValidationResult {
        let mut errors = Vec::new();

        if settings.participants == 0 {
            errors.push(Self::error("participants", "Must be at least 1"));
        } else if settings.participants > MAX_PARTICIPANTS {
            errors.push(Self::error(
                "participants",
                format!("Must be at most {MAX_PARTICIPANTS}"),
            ));
        }

        if settings.group_size == 0 {
            errors.push(Self::error("group_size", "Must be at least 1"));
        }

        if settings.history_limit == Some(0) {
            errors.push(Self::error(
                "history_limit",
                "Must be at least 1 when set; omit it for unbounded history",
            ));
        }

        if settings.rotation_delay_ms > MAX_ROTATION_DELAY_MS {
            errors.push(Self::error(
                "rotation_delay_ms",
                format!("Must be at most {MAX_ROTATION_DELAY_MS}"),
            ));
        }

        errors.extend(Self::validate_roster(
            &settings.roster.base,
            &settings.roster.extra,
        ));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate the base roster and extra member names
    pub fn validate_roster(base: &[String], extra: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if base.len() != 4 {
            errors.push(Self::error(
                "roster.base",
                format!("Expected exactly 4 names, found {}", base.len()),
            ));
        }

        let mut seen = HashSet::new();
        for (index, name) in base.iter().enumerate() {
            if name.trim().is_empty() {
                errors.push(Self::error(
                    format!("roster.base[{index}]"),
                    "Name cannot be empty",
                ));
            } else if !seen.insert(name.trim()) {
                errors.push(Self::error(
                    format!("roster.base[{index}]"),
                    format!("Duplicate name: {name}"),
                ));
            }
        }

        if extra.trim().is_empty() {
            errors.push(Self::error("roster.extra", "Name cannot be empty"));
        } else if seen.contains(extra.trim()) {
            errors.push(Self::error(
                "roster.extra",
                format!("Name already in base roster: {extra}"),
            ));
        }

        errors
    }

    fn error(field: impl Into<String>, message: impl Into<String>) -> ValidationError {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

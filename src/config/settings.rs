use serde::{Deserialize, Serialize};

use crate::core::partition::{DEFAULT_GROUP_SIZE, DEFAULT_PARTICIPANTS};
use crate::core::skills::{Mode, RosterSource, DEFAULT_BASE_MEMBERS, DEFAULT_EXTRA_MEMBER};

/// Delay before a rotation is committed, in milliseconds.
pub const DEFAULT_ROTATION_DELAY_MS: u64 = 150;

/// Longest rotation delay a settings file may ask for.
pub const MAX_ROTATION_DELAY_MS: u64 = 5_000;

/// User settings. Every field falls back to its default when absent from the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub participants: usize,
    pub group_size: usize,
    pub extended: bool,
    pub roster: RosterSettings,
    pub history_limit: Option<usize>,
    pub rotation_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSettings {
    pub base: Vec<String>,
    pub extra: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            participants: DEFAULT_PARTICIPANTS,
            group_size: DEFAULT_GROUP_SIZE,
            extended: false,
            roster: RosterSettings::default(),
            history_limit: None,
            rotation_delay_ms: DEFAULT_ROTATION_DELAY_MS,
        }
    }
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_MEMBERS.iter().map(|s| s.to_string()).collect(),
            extra: DEFAULT_EXTRA_MEMBER.to_string(),
        }
    }
}

impl Settings {
    pub fn mode(&self) -> Mode {
        Mode::from_extended(self.extended)
    }

    pub fn roster_source(&self) -> RosterSource {
        RosterSource::from_names(self.roster.base.as_slice(), &self.roster.extra)
    }
}

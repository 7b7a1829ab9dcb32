pub mod config;
pub mod config_commands;
pub mod core;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod rotate;
pub mod round;
pub mod session;
pub mod shuffle;

#[cfg(any(test, debug_assertions))]
pub mod test_utils;

// Re-export the core API so callers don't need the module paths
pub use crate::core::partition::{
    partition, Group, DEFAULT_GROUP_SIZE, DEFAULT_PARTICIPANTS, MAX_PARTICIPANTS,
};
pub use crate::core::skills::{
    derive_initial_skills, derive_roster, derive_vocabulary, rotate, Mode, RosterSource,
    SkillLevel, TeamMember,
};
pub use error::{GroupwiseError, Result};
pub use round::{RoundHistory, ShuffleRound};
pub use session::{PendingRotation, RotationSession, ShuffleSession};

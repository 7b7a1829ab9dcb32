//! Test fixtures and data builders for consistent test data

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::skills::RosterSource;

/// Creates a deterministic generator for reproducible shuffles
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A fixed point in time for rounds created in tests
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
        .single()
        .unwrap_or_default()
}

/// A roster with recognisable names distinct from the built-in defaults
pub fn sample_roster_source() -> RosterSource {
    RosterSource::from_names(&["Ada", "Grace", "Linus", "Barbara"], "Ken")
}

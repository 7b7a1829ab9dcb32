//! Core logic
//!
//! Pure functions for partitioning participants into groups and rotating skill
//! levels across a roster. Randomness is always passed in, never pulled from a
//! global generator.

pub mod partition;
pub mod skills;

#[cfg(test)]
mod partition_proptest;

#[cfg(test)]
mod skills_proptest;

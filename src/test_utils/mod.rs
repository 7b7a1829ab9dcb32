//! Common test utilities for groupwise tests
//!
//! Seeded generators, fixed timestamps and partition assertions shared by the
//! unit tests of several modules.

#[cfg(any(test, debug_assertions))]
pub mod fixtures;

#[cfg(any(test, debug_assertions))]
pub mod assertions;

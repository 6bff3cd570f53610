//! # Civ Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Ruleset and world fixtures
//! - In-memory save store
//! - Determinism test harness
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod determinism;
pub mod fixtures;
pub mod memory_store;
pub mod strategies;

pub use memory_store::MemorySaveStore;

/// Re-export proptest for convenience.
pub use proptest;

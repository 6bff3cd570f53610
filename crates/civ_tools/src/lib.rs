//! # Civ Development Tools
//!
//! Command-line tools for development:
//! - Ruleset validator

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod validate;

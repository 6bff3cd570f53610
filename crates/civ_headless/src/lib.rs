//! Headless game runner for CI and scripted checks.
//!
//! Boots a game session exactly as the game does at startup (resume the
//! autosave, or seed a new world) and prints a JSON summary on stdout.
//!
//! - **stdout**: the [`SessionSummary`] as JSON
//! - **stderr**: logs (human-readable)
//!
//! # Example
//!
//! ```bash
//! # Resume or create, with a fixed seed
//! cargo run -p civ_headless -- --seed 42 run
//!
//! # Force a new game, keeping tutorial progress
//! cargo run -p civ_headless -- new-game --keep-tutorials
//! ```

pub mod ruleset_loader;
pub mod runner;
pub mod summary;

pub use ruleset_loader::{default_ruleset_dir, load_ruleset};
pub use runner::{run_session, HeadlessConfig, SessionAction};
pub use summary::SessionSummary;

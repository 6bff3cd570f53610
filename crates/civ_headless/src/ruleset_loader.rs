//! Locating and loading the ruleset for headless runs.

use std::path::PathBuf;
use std::sync::Arc;

use civ_core::error::Result;
use civ_core::ruleset::{link_ruleset, RawRuleset, RonDirectorySource, Ruleset};

/// Environment variable overriding the ruleset directory.
pub const RULESET_DIR_ENV: &str = "CIV_RULESET_DIR";

/// Find the ruleset directory: the environment override if it exists, else
/// the first standard location that exists.
#[must_use]
pub fn default_ruleset_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(RULESET_DIR_ENV) {
        let path = PathBuf::from(dir);
        if path.exists() {
            return Some(path);
        }
    }

    let candidates = [
        "crates/civ_headless/assets/ruleset",
        "assets/ruleset",
        "../civ_headless/assets/ruleset",
    ];

    candidates
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// Load and link the ruleset in `dir`.
///
/// # Errors
///
/// Returns the load or link error; either one means the game cannot start.
pub fn load_ruleset(dir: impl Into<PathBuf>) -> Result<Arc<Ruleset>> {
    let source = RonDirectorySource::new(dir);
    tracing::info!("Loading ruleset from {}", source.dir().display());
    let raw = RawRuleset::load(&source)?;
    Ok(Arc::new(link_ruleset(raw)?))
}

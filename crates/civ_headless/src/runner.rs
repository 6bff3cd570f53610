//! Headless session runner.
//!
//! Does what the game does at startup, without a screen: load the ruleset,
//! resume the autosave or seed a new world, write the autosave back.

use std::path::PathBuf;

use civ_core::bootstrap::{Game, AUTOSAVE_NAME};
use civ_core::error::Result;
use civ_core::persistence::FileSaveStore;
use civ_core::world_seeder::{seeded_rng, WorldConfig};

use crate::ruleset_loader::load_ruleset;
use crate::summary::SessionSummary;

/// What to do once the session is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Keep whatever bootstrap produced.
    Resume,
    /// Replace it with a new game.
    NewGame {
        /// Carry tutorial progress into the new game.
        keep_tutorials: bool,
    },
}

/// Configuration for a headless run.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Ruleset directory.
    pub data_dir: PathBuf,
    /// Save directory.
    pub save_dir: PathBuf,
    /// World configuration file; defaults when unset.
    pub world_config: Option<PathBuf>,
    /// Seed override.
    pub seed: Option<u64>,
    /// Action after bootstrap.
    pub action: SessionAction,
}

impl HeadlessConfig {
    /// Resume-or-create with default world settings.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>, save_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            save_dir: save_dir.into(),
            world_config: None,
            seed: None,
            action: SessionAction::Resume,
        }
    }

    /// Set the seed override.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the action.
    #[must_use]
    pub const fn with_action(mut self, action: SessionAction) -> Self {
        self.action = action;
        self
    }

    /// Read world settings from a file.
    #[must_use]
    pub fn with_world_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.world_config = Some(path.into());
        self
    }

    fn load_world_config(&self) -> Result<WorldConfig> {
        let mut world = match &self.world_config {
            Some(path) => WorldConfig::from_ron_file(path)?,
            None => WorldConfig::default(),
        };
        if let Some(seed) = self.seed {
            world.seed = Some(seed);
        }
        Ok(world)
    }
}

/// Run one headless session and summarize it.
///
/// # Errors
///
/// Returns ruleset load and link errors, world configuration errors, and
/// autosave write errors. An unusable autosave is not an error.
pub fn run_session(config: &HeadlessConfig) -> Result<SessionSummary> {
    let ruleset = load_ruleset(&config.data_dir)?;
    let world = config.load_world_config()?;
    let rng = seeded_rng(world.seed);

    let mut store = FileSaveStore::new(&config.save_dir);
    let mut game = Game::bootstrap(ruleset, world, &store, rng)?;

    if let SessionAction::NewGame { keep_tutorials } = config.action {
        game.start_new_game(keep_tutorials)?;
    }

    game.save_game(&mut store, AUTOSAVE_NAME)?;
    tracing::info!(
        "Autosave written to {}",
        store.path_for(AUTOSAVE_NAME).display()
    );

    Ok(SessionSummary::from_session(game.session(), game.origin()))
}

//! Game startup: resume the autosave or create a new world.
//!
//! [`Game`] is the one context object that owns everything a running game
//! needs. Nothing here is global; tests build as many games as they like.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::persistence::{LoadOutcome, SaveStore};
use crate::ruleset::Ruleset;
use crate::session::GameSessionState;
use crate::world_seeder::{WorldConfig, WorldSeeder};

/// Save slot written after every turn and read at startup.
pub const AUTOSAVE_NAME: &str = "Autosave";

/// How the current session came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOrigin {
    /// Loaded from a save.
    Resumed,
    /// Freshly seeded.
    NewGame,
}

/// A running game.
#[derive(Debug)]
pub struct Game<R: Rng> {
    ruleset: Arc<Ruleset>,
    config: WorldConfig,
    rng: R,
    session: GameSessionState,
    origin: SessionOrigin,
}

impl<R: Rng> Game<R> {
    /// Start the game: resume the autosave if it is usable, otherwise seed
    /// a new world.
    ///
    /// A missing or corrupt autosave is not an error.
    ///
    /// # Errors
    ///
    /// Returns the seeding error if a new world has to be created and
    /// cannot be.
    pub fn bootstrap(
        ruleset: Arc<Ruleset>,
        config: WorldConfig,
        store: &impl SaveStore,
        mut rng: R,
    ) -> Result<Self> {
        if store.exists(AUTOSAVE_NAME) {
            match resume(&ruleset, store, AUTOSAVE_NAME) {
                Ok(session) => {
                    tracing::info!(
                        "Resumed autosave: {} civilizations, turn {}",
                        session.civilizations.len(),
                        session.turns
                    );
                    return Ok(Self {
                        ruleset,
                        config,
                        rng,
                        session,
                        origin: SessionOrigin::Resumed,
                    });
                }
                Err(e) => tracing::warn!("Autosave unusable, starting a new game: {}", e),
            }
        } else {
            tracing::info!("No autosave found, starting a new game");
        }

        let session = WorldSeeder::new(&ruleset, &config).seed_new_session(None, &mut rng)?;
        Ok(Self {
            ruleset,
            config,
            rng,
            session,
            origin: SessionOrigin::NewGame,
        })
    }

    /// Replace the current session with a freshly seeded one.
    ///
    /// With `preserve_tutorial_progress` the tutorials already shown carry
    /// over; otherwise the new session starts with none shown.
    ///
    /// # Errors
    ///
    /// Returns the seeding error. The current session is kept on failure.
    pub fn start_new_game(&mut self, preserve_tutorial_progress: bool) -> Result<()> {
        let carry = preserve_tutorial_progress.then_some(&self.session);
        let session =
            WorldSeeder::new(&self.ruleset, &self.config).seed_new_session(carry, &mut self.rng)?;

        tracing::info!(
            "Started new game (tutorial progress {})",
            if preserve_tutorial_progress { "kept" } else { "reset" }
        );
        self.session = session;
        self.origin = SessionOrigin::NewGame;
        Ok(())
    }

    /// Load a named save, replacing the current session.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] if the save is missing, corrupt,
    /// or does not match the ruleset. The current session is kept on
    /// failure.
    pub fn load_game(&mut self, store: &impl SaveStore, name: &str) -> Result<()> {
        self.session = resume(&self.ruleset, store, name)?;
        self.origin = SessionOrigin::Resumed;
        tracing::info!("Loaded game '{}'", name);
        Ok(())
    }

    /// Write the current session to a named save.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Save`] if the store cannot write it.
    pub fn save_game(&self, store: &mut impl SaveStore, name: &str) -> Result<()> {
        store.save(name, &self.session)
    }

    /// The current session.
    #[must_use]
    pub const fn session(&self) -> &GameSessionState {
        &self.session
    }

    /// Mutable access to the current session.
    pub fn session_mut(&mut self) -> &mut GameSessionState {
        &mut self.session
    }

    /// The shared ruleset.
    #[must_use]
    pub fn ruleset(&self) -> &Arc<Ruleset> {
        &self.ruleset
    }

    /// World configuration used for new games.
    #[must_use]
    pub const fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// How the current session was created.
    #[must_use]
    pub const fn origin(&self) -> SessionOrigin {
        self.origin
    }
}

fn resume(ruleset: &Ruleset, store: &impl SaveStore, name: &str) -> Result<GameSessionState> {
    let mut session = match store.load(name) {
        LoadOutcome::Loaded(session) => *session,
        LoadOutcome::NotFound => {
            return Err(GameError::InvalidState(format!("no save named '{name}'")));
        }
        LoadOutcome::Corrupt(reason) => {
            return Err(GameError::InvalidState(format!(
                "save '{name}' is corrupt: {reason}"
            )));
        }
    };
    session.set_transients(ruleset)?;
    Ok(session)
}

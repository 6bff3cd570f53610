//! Error types for ruleset linking, world seeding and persistence.

use thiserror::Error;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Top-level error type for all game core errors.
#[derive(Debug, Error)]
pub enum GameError {
    /// A ruleset table could not be read or parsed.
    #[error("Failed to load ruleset data '{path}': {message}")]
    DataLoad {
        /// Path (or table name) that failed to load.
        path: String,
        /// Error message.
        message: String,
    },

    /// A name reference in the ruleset does not resolve.
    ///
    /// Signals a corrupt or mismatched ruleset; the game cannot start.
    #[error("'{entity}' references unknown {field} '{target}'")]
    DanglingReference {
        /// Entity holding the reference.
        entity: String,
        /// Which kind of reference it is (e.g. "technology").
        field: &'static str,
        /// The name that failed to resolve.
        target: String,
    },

    /// World configuration rejected before seeding.
    #[error("Invalid world configuration: {0}")]
    InvalidConfig(String),

    /// A configured civilization has no ruleset entry.
    #[error("Unknown civilization: {0}")]
    UnknownCivilization(String),

    /// No free tile was left for a civilization's starting position.
    #[error(
        "No free starting tile left for '{civilization}' after placing {placed} civilizations; \
         exclusion radius too large for the map"
    )]
    StartingPoolExhausted {
        /// Civilization that could not be placed.
        civilization: String,
        /// Civilizations placed before the pool ran out.
        placed: usize,
    },

    /// No eligible tile was left for a barbarian unit.
    #[error("No free tile left for barbarian unit: spawned {spawned} of {requested}")]
    BarbarianPoolExhausted {
        /// Units spawned before the pool ran out.
        spawned: u32,
        /// Units requested by the configuration.
        requested: u32,
    },

    /// Writing a save failed.
    #[error("Failed to save game '{name}': {message}")]
    Save {
        /// Save slot name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Invalid game state.
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

impl GameError {
    /// Whether this error stems from the world configuration rather than
    /// from the ruleset data or the environment.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig(_)
                | Self::UnknownCivilization(_)
                | Self::StartingPoolExhausted { .. }
                | Self::BarbarianPoolExhausted { .. }
        )
    }
}

//! # Civ Core
//!
//! Rules and world setup for a hex-based turn-based strategy game.
//!
//! This crate contains **only** game logic:
//! - No rendering
//! - No global state (a [`bootstrap::Game`] owns everything)
//! - All randomness flows through one caller-provided rng
//!
//! ## Crate Structure
//!
//! - [`data`] - Raw ruleset table definitions (RON)
//! - [`ruleset`] - Loading and linking tables into a [`ruleset::Ruleset`]
//! - [`hex`] / [`tile_map`] - Map geometry and tiles
//! - [`map_generation`] - Procedural terrain
//! - [`world_seeder`] - New-game world creation
//! - [`persistence`] - Save slots
//! - [`bootstrap`] - Resume-or-new-game startup

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod bootstrap;
pub mod civilization;
pub mod data;
pub mod error;
pub mod hex;
pub mod map_generation;
pub mod persistence;
pub mod ruleset;
pub mod session;
pub mod tile_map;
pub mod world_seeder;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::bootstrap::{Game, SessionOrigin, AUTOSAVE_NAME};
    pub use crate::civilization::{City, CivKind, CivilizationInfo, BARBARIAN_CIV_NAME};
    pub use crate::error::{GameError, Result};
    pub use crate::hex::HexCoord;
    pub use crate::persistence::{FileSaveStore, LoadOutcome, SaveStore};
    pub use crate::ruleset::{link_ruleset, RawRuleset, RonDirectorySource, Ruleset};
    pub use crate::session::{GameSessionState, TutorialProgress};
    pub use crate::tile_map::{MapUnit, Tile, TileMap};
    pub use crate::world_seeder::{seeded_rng, WorldConfig, WorldSeeder};
}

//! JSON summary of a bootstrapped session.
//!
//! Stands in for the presentation layer: everything a UI would show right
//! after startup, as one JSON object on stdout.

use serde::{Deserialize, Serialize};

use civ_core::bootstrap::SessionOrigin;
use civ_core::civilization::{CivKind, CivilizationInfo};
use civ_core::hex::HexCoord;
use civ_core::session::GameSessionState;

/// One civilization as shown in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilizationSummary {
    /// Civilization name.
    pub name: String,
    /// Controller.
    pub kind: CivKind,
    /// Starting tile, if any.
    pub start_position: Option<HexCoord>,
    /// Capital name, if founded.
    pub capital: Option<String>,
    /// Tiles owned.
    pub owned_tiles: usize,
    /// Treasury.
    pub gold: i32,
}

/// A unit on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSummary {
    /// Unit type.
    pub name: String,
    /// Owning civilization.
    pub owner: String,
    /// Tile.
    pub position: HexCoord,
}

/// Summary of the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Whether the session was resumed or created.
    pub origin: SessionOrigin,
    /// Turns played.
    pub turns: u32,
    /// Map radius.
    pub map_radius: u32,
    /// Number of tiles.
    pub tile_count: usize,
    /// Civilizations in session order.
    pub civilizations: Vec<CivilizationSummary>,
    /// Every unit on the map.
    pub units: Vec<UnitSummary>,
    /// Tutorials already shown.
    pub tutorials_shown: Vec<String>,
}

impl SessionSummary {
    /// Summarize a session.
    #[must_use]
    pub fn from_session(session: &GameSessionState, origin: SessionOrigin) -> Self {
        let civ_summary = |civ: &CivilizationInfo| CivilizationSummary {
            name: civ.civ_name.clone(),
            kind: civ.kind,
            start_position: civ.start_position,
            capital: civ.capital.as_ref().map(|city| city.name.clone()),
            owned_tiles: session
                .tile_map
                .tiles()
                .filter(|tile| tile.owner.as_deref() == Some(civ.civ_name.as_str()))
                .count(),
            gold: civ.gold,
        };

        Self {
            origin,
            turns: session.turns,
            map_radius: session.tile_map.radius(),
            tile_count: session.tile_map.len(),
            civilizations: session.civilizations.iter().map(civ_summary).collect(),
            units: session
                .tile_map
                .units()
                .map(|(position, unit)| UnitSummary {
                    name: unit.name.clone(),
                    owner: unit.owner.clone(),
                    position,
                })
                .collect(),
            tutorials_shown: session.tutorial.shown.clone(),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

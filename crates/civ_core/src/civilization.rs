//! Per-session civilization state.

use serde::{Deserialize, Serialize};

use crate::hex::HexCoord;

/// Name of the barbarian civilization. Reserved; rulesets and world
/// configurations must not use it.
pub const BARBARIAN_CIV_NAME: &str = "Barbarians";

/// Who controls a civilization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CivKind {
    /// The human player.
    Player,
    /// A computer rival.
    Ai,
    /// The barbarian faction. Owns units but no territory.
    Barbarian,
}

/// A founded city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// City name.
    pub name: String,
    /// City tile.
    pub position: HexCoord,
}

/// One civilization taking part in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilizationInfo {
    /// Civilization name, matching a ruleset entry except for barbarians.
    pub civ_name: String,
    /// Controller.
    pub kind: CivKind,
    /// Starting tile. `None` for barbarians.
    pub start_position: Option<HexCoord>,
    /// Capital, once founded.
    pub capital: Option<City>,
    /// Treasury.
    pub gold: i32,
}

impl CivilizationInfo {
    /// A civilization starting at `position`.
    #[must_use]
    pub fn new(civ_name: impl Into<String>, kind: CivKind, position: HexCoord) -> Self {
        Self {
            civ_name: civ_name.into(),
            kind,
            start_position: Some(position),
            capital: None,
            gold: 0,
        }
    }

    /// The barbarian civilization.
    #[must_use]
    pub fn barbarians() -> Self {
        Self {
            civ_name: BARBARIAN_CIV_NAME.to_string(),
            kind: CivKind::Barbarian,
            start_position: None,
            capital: None,
            gold: 0,
        }
    }

    /// Found the capital with the given name.
    #[must_use]
    pub fn with_capital(mut self, name: impl Into<String>, position: HexCoord) -> Self {
        self.capital = Some(City {
            name: name.into(),
            position,
        });
        self
    }

    /// Check if this is the human player.
    #[must_use]
    pub fn is_player(&self) -> bool {
        self.kind == CivKind::Player
    }

    /// Check if this is the barbarian faction.
    #[must_use]
    pub fn is_barbarian(&self) -> bool {
        self.kind == CivKind::Barbarian
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barbarians_have_no_position() {
        let barbarians = CivilizationInfo::barbarians();
        assert!(barbarians.is_barbarian());
        assert_eq!(barbarians.civ_name, BARBARIAN_CIV_NAME);
        assert!(barbarians.start_position.is_none());
    }

    #[test]
    fn test_with_capital() {
        let civ = CivilizationInfo::new("Babylon", CivKind::Player, HexCoord::ORIGIN)
            .with_capital("Babylon", HexCoord::ORIGIN);
        assert!(civ.is_player());
        assert_eq!(civ.capital.unwrap().position, HexCoord::ORIGIN);
    }
}

//! The state of one running game.

use serde::{Deserialize, Serialize};

use crate::civilization::CivilizationInfo;
use crate::error::Result;
use crate::ruleset::Ruleset;
use crate::tile_map::TileMap;

/// Tutorials the player has already seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialProgress {
    /// Tutorial keys in the order they were shown.
    pub shown: Vec<String>,
}

impl TutorialProgress {
    /// Record a tutorial as shown. Repeats are ignored.
    pub fn mark_shown(&mut self, key: impl Into<String>) {
        let key = key.into();
        if !self.has_shown(&key) {
            self.shown.push(key);
        }
    }

    /// Whether a tutorial was shown.
    #[must_use]
    pub fn has_shown(&self, key: &str) -> bool {
        self.shown.iter().any(|k| k == key)
    }
}

/// Complete session state. This is what gets saved and loaded.
///
/// Civilizations are ordered: the player first, then the barbarians, then
/// the rivals in configuration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSessionState {
    /// The world map.
    pub tile_map: TileMap,
    /// Participating civilizations.
    pub civilizations: Vec<CivilizationInfo>,
    /// Tutorial progress.
    pub tutorial: TutorialProgress,
    /// Turns played.
    pub turns: u32,
}

impl GameSessionState {
    /// The human player's civilization.
    #[must_use]
    pub fn player_civ(&self) -> Option<&CivilizationInfo> {
        self.civilizations.iter().find(|civ| civ.is_player())
    }

    /// The barbarian civilization.
    #[must_use]
    pub fn barbarian_civ(&self) -> Option<&CivilizationInfo> {
        self.civilizations.iter().find(|civ| civ.is_barbarian())
    }

    /// Look up a civilization by name.
    #[must_use]
    pub fn civ(&self, name: &str) -> Option<&CivilizationInfo> {
        self.civilizations.iter().find(|civ| civ.civ_name == name)
    }

    /// Rebuild ruleset-derived state after creation or load.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GameError::InvalidState`] if the map names
    /// entities the ruleset does not define.
    pub fn set_transients(&mut self, ruleset: &Ruleset) -> Result<()> {
        self.tile_map.set_transients(ruleset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civilization::CivKind;
    use crate::hex::HexCoord;
    use crate::tile_map::Tile;

    fn create_test_session() -> GameSessionState {
        let tiles = HexCoord::ORIGIN
            .within(2)
            .map(|position| Tile::new(position, "Plains"));
        GameSessionState {
            tile_map: TileMap::from_tiles(2, tiles),
            civilizations: vec![
                CivilizationInfo::new("Babylon", CivKind::Player, HexCoord::ORIGIN),
                CivilizationInfo::barbarians(),
                CivilizationInfo::new("Greece", CivKind::Ai, HexCoord::new(2, 0)),
            ],
            tutorial: TutorialProgress::default(),
            turns: 0,
        }
    }

    #[test]
    fn test_civ_lookups() {
        let session = create_test_session();
        assert_eq!(session.player_civ().unwrap().civ_name, "Babylon");
        assert_eq!(session.barbarian_civ().unwrap().civ_name, "Barbarians");
        assert_eq!(session.civ("Greece").unwrap().kind, CivKind::Ai);
        assert!(session.civ("Egypt").is_none());
    }

    #[test]
    fn test_tutorial_progress() {
        let mut progress = TutorialProgress::default();
        progress.mark_shown("Introduction");
        progress.mark_shown("Introduction");
        progress.mark_shown("CityFounded");

        assert!(progress.has_shown("Introduction"));
        assert!(!progress.has_shown("EnemyCity"));
        assert_eq!(progress.shown.len(), 2);
    }
}

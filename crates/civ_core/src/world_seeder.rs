//! New-game world creation.
//!
//! [`WorldSeeder`] turns a linked [`Ruleset`] and a [`WorldConfig`] into a
//! fresh [`GameSessionState`]: a generated map, the player at the origin,
//! rivals spread out by an exclusion radius, and a handful of barbarian
//! units on open land.

use std::collections::HashSet;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};

use crate::civilization::{CivKind, CivilizationInfo, BARBARIAN_CIV_NAME};
use crate::error::{GameError, Result};
use crate::hex::HexCoord;
use crate::map_generation::{generate_map, MapConfig, MAX_MAP_RADIUS};
use crate::ruleset::Ruleset;
use crate::session::GameSessionState;
use crate::tile_map::{MapUnit, TileMap};

/// World setup for a new game.
///
/// # Example RON
///
/// ```ron
/// WorldConfig(
///     map_radius: 20,
///     exclusion_radius: 6,
///     player_civilization: "Babylon",
///     rival_civilizations: ["Greece", "China", "Egypt"],
///     barbarian_units: 5,
///     barbarian_unit: "Warrior",
///     seed: 1234,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Map radius around the origin, at most [`MAX_MAP_RADIUS`].
    pub map_radius: u32,
    /// Minimum spacing between starting positions. Start tiles are strictly
    /// farther apart than this.
    pub exclusion_radius: u32,
    /// The human player's civilization, placed at the origin.
    pub player_civilization: String,
    /// Computer rivals, placed in this order.
    pub rival_civilizations: Vec<String>,
    /// Number of barbarian units to spawn.
    pub barbarian_units: u32,
    /// Unit type spawned for the barbarians.
    pub barbarian_unit: String,
    /// Fixed seed for reproducible worlds; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            map_radius: 20,
            exclusion_radius: 6,
            player_civilization: "Babylon".to_string(),
            rival_civilizations: vec![
                "Greece".to_string(),
                "China".to_string(),
                "Egypt".to_string(),
            ],
            barbarian_units: 5,
            barbarian_unit: "Warrior".to_string(),
            seed: None,
        }
    }
}

impl WorldConfig {
    /// Load a configuration from a RON file. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DataLoad`] if the file cannot be read or parsed.
    pub fn from_ron_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let to_error = |message: String| GameError::DataLoad {
            path: path.display().to_string(),
            message,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| to_error(e.to_string()))?;
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(&contents)
            .map_err(|e| to_error(e.to_string()))
    }

    /// Set a fixed seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the map radius.
    #[must_use]
    pub const fn with_map_radius(mut self, radius: u32) -> Self {
        self.map_radius = radius;
        self
    }

    /// Set the exclusion radius.
    #[must_use]
    pub const fn with_exclusion_radius(mut self, radius: u32) -> Self {
        self.exclusion_radius = radius;
        self
    }

    /// Replace the rival list.
    #[must_use]
    pub fn with_rivals<I, S>(mut self, rivals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rival_civilizations = rivals.into_iter().map(Into::into).collect();
        self
    }

    /// Set the number of barbarian units.
    #[must_use]
    pub const fn with_barbarian_units(mut self, count: u32) -> Self {
        self.barbarian_units = count;
        self
    }

    /// Player and rivals, in placement order.
    pub fn civilization_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.player_civilization.as_str())
            .chain(self.rival_civilizations.iter().map(String::as_str))
    }

    /// Check the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] for a map radius above
    /// [`MAX_MAP_RADIUS`], an empty player name, a civilization listed
    /// twice, or use of the reserved barbarian name.
    pub fn validate(&self) -> Result<()> {
        if self.map_radius > MAX_MAP_RADIUS {
            return Err(GameError::InvalidConfig(format!(
                "map radius {} exceeds the maximum of {MAX_MAP_RADIUS}",
                self.map_radius
            )));
        }

        if self.player_civilization.trim().is_empty() {
            return Err(GameError::InvalidConfig(
                "player civilization name is empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in self.civilization_names() {
            if name == BARBARIAN_CIV_NAME {
                return Err(GameError::InvalidConfig(format!(
                    "'{BARBARIAN_CIV_NAME}' is reserved and cannot be configured"
                )));
            }
            if !seen.insert(name) {
                return Err(GameError::InvalidConfig(format!(
                    "civilization '{name}' is listed more than once"
                )));
            }
        }

        Ok(())
    }
}

/// Create the session rng: seeded when a seed is given, else from entropy.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Builds new game sessions.
#[derive(Debug, Clone, Copy)]
pub struct WorldSeeder<'a> {
    ruleset: &'a Ruleset,
    config: &'a WorldConfig,
}

impl<'a> WorldSeeder<'a> {
    /// Create a seeder.
    #[must_use]
    pub const fn new(ruleset: &'a Ruleset, config: &'a WorldConfig) -> Self {
        Self { ruleset, config }
    }

    /// Create a fresh session.
    ///
    /// Tutorial progress is copied from `carry_tutorial_from` when given,
    /// otherwise it starts empty.
    ///
    /// # Errors
    ///
    /// Returns a configuration error ([`GameError::is_configuration_error`])
    /// when the configuration is invalid, the barbarian unit cannot fight,
    /// or the map cannot fit the requested civilizations and barbarian
    /// units. Returns [`GameError::DanglingReference`] if the barbarian unit
    /// type is unknown and [`GameError::InvalidState`] if the ruleset cannot
    /// produce a map.
    pub fn seed_new_session<R: Rng + ?Sized>(
        &self,
        carry_tutorial_from: Option<&GameSessionState>,
        rng: &mut R,
    ) -> Result<GameSessionState> {
        self.check_references()?;

        let mut tile_map = generate_map(
            &MapConfig::with_radius(self.config.map_radius),
            self.ruleset,
            rng,
        )?;

        let exclusion = self.config.exclusion_radius;
        let mut free_tiles: Vec<HexCoord> = tile_map
            .positions()
            .filter(|position| position.distance(&HexCoord::ORIGIN) > exclusion)
            .collect();

        let mut civilizations = Vec::with_capacity(self.config.rival_civilizations.len() + 2);
        civilizations.push(CivilizationInfo::new(
            self.config.player_civilization.clone(),
            CivKind::Player,
            HexCoord::ORIGIN,
        ));
        civilizations.push(CivilizationInfo::barbarians());

        for (placed, rival) in self.config.rival_civilizations.iter().enumerate() {
            let Some(&start) = free_tiles.choose(rng) else {
                // The player is already placed.
                return Err(GameError::StartingPoolExhausted {
                    civilization: rival.clone(),
                    placed: placed + 1,
                });
            };
            free_tiles.retain(|position| position.distance(&start) > exclusion);
            tracing::debug!("Placed {} at {}", rival, start);
            civilizations.push(CivilizationInfo::new(rival.clone(), CivKind::Ai, start));
        }

        let civilizations = civilizations
            .into_iter()
            .map(|civ| self.found_capital(civ, &mut tile_map))
            .collect();

        let mut session = GameSessionState {
            tile_map,
            civilizations,
            tutorial: carry_tutorial_from
                .map(|previous| previous.tutorial.clone())
                .unwrap_or_default(),
            turns: 0,
        };
        session.set_transients(self.ruleset)?;

        self.spawn_barbarians(&mut session.tile_map, &mut free_tiles, rng)?;

        tracing::info!(
            "Seeded new world: radius {}, {} civilizations, {} barbarian units",
            self.config.map_radius,
            session.civilizations.len(),
            self.config.barbarian_units
        );
        Ok(session)
    }

    fn check_references(&self) -> Result<()> {
        self.config.validate()?;

        for name in self.config.civilization_names() {
            if !self.ruleset.civilizations.contains(name) {
                return Err(GameError::UnknownCivilization(name.to_string()));
            }
        }

        let Some(unit) = self.ruleset.units.get(&self.config.barbarian_unit) else {
            return Err(GameError::DanglingReference {
                entity: "world configuration".to_string(),
                field: "unit",
                target: self.config.barbarian_unit.clone(),
            });
        };
        if !unit.is_military() {
            return Err(GameError::InvalidConfig(format!(
                "barbarian unit '{}' is a civilian unit",
                unit.name
            )));
        }

        Ok(())
    }

    /// Found the capital at the start position and claim adjacent tiles
    /// that nobody owns yet.
    fn found_capital(&self, civ: CivilizationInfo, tile_map: &mut TileMap) -> CivilizationInfo {
        let Some(position) = civ.start_position else {
            return civ;
        };

        let capital_name = self
            .ruleset
            .civilizations
            .get(&civ.civ_name)
            .map_or_else(|| format!("{} Capital", civ.civ_name), |data| data.capital_name());

        for claimed in position.within(1) {
            if let Some(tile) = tile_map.get_mut(claimed) {
                if tile.owner.is_none() {
                    tile.owner = Some(civ.civ_name.clone());
                }
            }
        }

        tracing::debug!("{} founded {} at {}", civ.civ_name, capital_name, position);
        civ.with_capital(capital_name, position)
    }

    /// Each unit takes a random free tile that is open land and unoccupied;
    /// the tile then leaves the pool.
    fn spawn_barbarians<R: Rng + ?Sized>(
        &self,
        tile_map: &mut TileMap,
        free_tiles: &mut Vec<HexCoord>,
        rng: &mut R,
    ) -> Result<()> {
        let requested = self.config.barbarian_units;
        let movement = self
            .ruleset
            .units
            .get(&self.config.barbarian_unit)
            .map_or(0, |unit| unit.movement);

        for spawned in 0..requested {
            let eligible: Vec<usize> = free_tiles
                .iter()
                .enumerate()
                .filter(|(_, position)| {
                    tile_map
                        .get(**position)
                        .is_some_and(|tile| tile.is_passable_land() && tile.unit.is_none())
                })
                .map(|(index, _)| index)
                .collect();

            let Some(&index) = eligible.choose(rng) else {
                return Err(GameError::BarbarianPoolExhausted { spawned, requested });
            };

            let position = free_tiles.swap_remove(index);
            tile_map.place_unit(
                position,
                MapUnit::new(self.config.barbarian_unit.clone(), BARBARIAN_CIV_NAME, movement),
            )?;
            tracing::debug!("Spawned barbarian {} at {}", self.config.barbarian_unit, position);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CivilizationData, Terrain, TerrainType, UnitData};

    fn create_test_ruleset() -> Ruleset {
        let mut ruleset = Ruleset::default();
        ruleset.terrains.insert(Terrain::new("Plains", TerrainType::Land));
        for name in ["Babylon", "Greece", "China", "Egypt"] {
            ruleset.civilizations.insert(CivilizationData::named(name));
        }
        ruleset.units.insert(UnitData {
            name: "Warrior".to_string(),
            description: String::new(),
            unit_type: crate::data::UnitType::Melee,
            movement: 2,
            strength: 8,
            ranged_strength: 0,
            cost: 40,
            required_tech: None,
        });
        ruleset
    }

    #[test]
    fn test_default_config_is_classic_setup() {
        let config = WorldConfig::default();
        assert_eq!(config.map_radius, 20);
        assert_eq!(config.exclusion_radius, 6);
        assert_eq!(
            config.civilization_names().collect::<Vec<_>>(),
            ["Babylon", "Greece", "China", "Egypt"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicates_and_reserved_name() {
        let duplicate = WorldConfig::default().with_rivals(["Greece", "Greece"]);
        assert!(matches!(duplicate.validate(), Err(GameError::InvalidConfig(_))));

        let player_twice = WorldConfig::default().with_rivals(["Babylon"]);
        assert!(player_twice.validate().is_err());

        let reserved = WorldConfig::default().with_rivals([BARBARIAN_CIV_NAME]);
        assert!(reserved.validate().is_err());

        let mut empty = WorldConfig::default();
        empty.player_civilization = "  ".to_string();
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_validate_bounds_map_radius() {
        assert!(WorldConfig::default()
            .with_map_radius(MAX_MAP_RADIUS)
            .validate()
            .is_ok());

        let huge = WorldConfig::default().with_map_radius(4_000_000_000);
        assert!(matches!(huge.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_oversized_radius_from_file_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.ron");
        std::fs::write(&path, "(map_radius: 4000000000)").unwrap();

        let config = WorldConfig::from_ron_file(&path).unwrap();
        let ruleset = create_test_ruleset();
        let err = WorldSeeder::new(&ruleset, &config)
            .seed_new_session(None, &mut seeded_rng(Some(1)))
            .unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_from_ron_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.ron");
        std::fs::write(&path, "(map_radius: 12, seed: 99)").unwrap();

        let config = WorldConfig::from_ron_file(&path).unwrap();
        assert_eq!(config.map_radius, 12);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.player_civilization, "Babylon");
    }

    #[test]
    fn test_session_layout() {
        let ruleset = create_test_ruleset();
        let config = WorldConfig::default();
        let mut rng = seeded_rng(Some(42));

        let session = WorldSeeder::new(&ruleset, &config)
            .seed_new_session(None, &mut rng)
            .unwrap();

        let names: Vec<_> = session.civilizations.iter().map(|c| c.civ_name.as_str()).collect();
        assert_eq!(names, ["Babylon", "Barbarians", "Greece", "China", "Egypt"]);
        assert_eq!(session.player_civ().unwrap().start_position, Some(HexCoord::ORIGIN));
        assert_eq!(session.tile_map.units().count(), 5);
        assert_eq!(session.turns, 0);
        assert!(session.tutorial.shown.is_empty());
    }

    #[test]
    fn test_capitals_claim_surrounding_tiles() {
        let ruleset = create_test_ruleset();
        let config = WorldConfig::default();
        let session = WorldSeeder::new(&ruleset, &config)
            .seed_new_session(None, &mut seeded_rng(Some(5)))
            .unwrap();

        let greece = session.civ("Greece").unwrap();
        let capital = greece.capital.as_ref().unwrap();
        assert_eq!(capital.name, "Greece Capital");
        assert_eq!(Some(capital.position), greece.start_position);
        assert!(session
            .tile_map
            .tiles_in_distance(capital.position, 1)
            .all(|tile| tile.owner.as_deref() == Some("Greece")));
    }

    #[test]
    fn test_unknown_civilization() {
        let ruleset = create_test_ruleset();
        let config = WorldConfig::default().with_rivals(["Atlantis"]);
        let result = WorldSeeder::new(&ruleset, &config)
            .seed_new_session(None, &mut seeded_rng(Some(1)));
        assert!(matches!(result, Err(GameError::UnknownCivilization(name)) if name == "Atlantis"));
    }

    #[test]
    fn test_starting_pool_exhausted() {
        let ruleset = create_test_ruleset();
        let config = WorldConfig::default()
            .with_map_radius(4)
            .with_exclusion_radius(6);
        let result = WorldSeeder::new(&ruleset, &config)
            .seed_new_session(None, &mut seeded_rng(Some(1)));

        let err = result.unwrap_err();
        assert!(err.is_configuration_error());
        assert!(matches!(
            err,
            GameError::StartingPoolExhausted { civilization, placed: 1 } if civilization == "Greece"
        ));
    }

    #[test]
    fn test_barbarian_pool_exhausted() {
        let ruleset = create_test_ruleset();
        let config = WorldConfig::default()
            .with_map_radius(3)
            .with_exclusion_radius(2)
            .with_rivals(Vec::<String>::new())
            .with_barbarian_units(100);
        let result = WorldSeeder::new(&ruleset, &config)
            .seed_new_session(None, &mut seeded_rng(Some(1)));

        // 18 tiles lie at distance 3, all of them eligible.
        assert!(matches!(
            result,
            Err(GameError::BarbarianPoolExhausted { spawned: 18, requested: 100 })
        ));
    }
}

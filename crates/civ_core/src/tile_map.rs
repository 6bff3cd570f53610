//! Hex tile map owned by a game session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::TerrainType;
use crate::error::{GameError, Result};
use crate::hex::HexCoord;
use crate::ruleset::Ruleset;

/// A unit standing on a tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapUnit {
    /// Unit type name.
    pub name: String,
    /// Owning civilization.
    pub owner: String,
    /// Health, 100 when fresh.
    pub health: u32,
    /// Movement points left this turn.
    pub movement: u32,
}

impl MapUnit {
    /// Full health value.
    pub const MAX_HEALTH: u32 = 100;

    /// Create a fresh unit.
    #[must_use]
    pub fn new(name: impl Into<String>, owner: impl Into<String>, movement: u32) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            health: Self::MAX_HEALTH,
            movement,
        }
    }
}

/// Tile properties derived from the ruleset.
///
/// Not saved; recomputed by [`TileMap::set_transients`] after generation or
/// load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileTraits {
    /// Base terrain is water.
    pub is_water: bool,
    /// Base terrain or feature cannot be entered.
    pub impassable: bool,
    /// Movement cost of the top terrain layer.
    pub movement_cost: u32,
}

/// A single map tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Tile position.
    pub position: HexCoord,
    /// Base terrain name.
    pub base_terrain: String,
    /// Optional terrain feature on top of the base.
    pub terrain_feature: Option<String>,
    /// Optional resource.
    pub resource: Option<String>,
    /// Optional improvement.
    pub improvement: Option<String>,
    /// Unit standing here.
    pub unit: Option<MapUnit>,
    /// Civilization owning the tile.
    pub owner: Option<String>,
    #[serde(skip)]
    traits: Option<TileTraits>,
}

impl Tile {
    /// Create a bare tile.
    #[must_use]
    pub fn new(position: HexCoord, base_terrain: impl Into<String>) -> Self {
        Self {
            position,
            base_terrain: base_terrain.into(),
            terrain_feature: None,
            resource: None,
            improvement: None,
            unit: None,
            owner: None,
            traits: None,
        }
    }

    /// The feature if present, otherwise the base terrain.
    #[must_use]
    pub fn top_terrain(&self) -> &str {
        self.terrain_feature.as_deref().unwrap_or(&self.base_terrain)
    }

    /// Derived properties, once transients are set.
    #[must_use]
    pub const fn traits(&self) -> Option<&TileTraits> {
        self.traits.as_ref()
    }

    /// Land tile a land unit may stand on. False before transients are set.
    #[must_use]
    pub fn is_passable_land(&self) -> bool {
        self.traits
            .is_some_and(|traits| !traits.is_water && !traits.impassable)
    }

    fn compute_traits(&self, ruleset: &Ruleset) -> Result<TileTraits> {
        let base = ruleset.terrains.get(&self.base_terrain).ok_or_else(|| {
            GameError::InvalidState(format!(
                "tile {} has unknown base terrain '{}'",
                self.position, self.base_terrain
            ))
        })?;

        let feature = match &self.terrain_feature {
            Some(name) => Some(ruleset.terrains.get(name).ok_or_else(|| {
                GameError::InvalidState(format!(
                    "tile {} has unknown terrain feature '{}'",
                    self.position, name
                ))
            })?),
            None => None,
        };

        if let Some(resource) = &self.resource {
            if !ruleset.tile_resources.contains(resource) {
                return Err(GameError::InvalidState(format!(
                    "tile {} has unknown resource '{resource}'",
                    self.position
                )));
            }
        }

        if let Some(improvement) = &self.improvement {
            if !ruleset.tile_improvements.contains(improvement) {
                return Err(GameError::InvalidState(format!(
                    "tile {} has unknown improvement '{improvement}'",
                    self.position
                )));
            }
        }

        Ok(TileTraits {
            is_water: base.terrain_type == TerrainType::Water,
            impassable: base.impassable || feature.is_some_and(|f| f.impassable),
            movement_cost: feature.unwrap_or(base).movement_cost,
        })
    }
}

/// All tiles of a hexagonal map of a given radius around the origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMap {
    radius: u32,
    tiles: BTreeMap<HexCoord, Tile>,
}

impl TileMap {
    /// Create a map from tiles. Tiles outside `radius` are dropped.
    #[must_use]
    pub fn from_tiles(radius: u32, tiles: impl IntoIterator<Item = Tile>) -> Self {
        let tiles = tiles
            .into_iter()
            .filter(|tile| tile.position.distance(&HexCoord::ORIGIN) <= radius)
            .map(|tile| (tile.position, tile))
            .collect();
        Self { radius, tiles }
    }

    /// Map radius.
    #[must_use]
    pub const fn radius(&self) -> u32 {
        self.radius
    }

    /// Tile at a position.
    #[must_use]
    pub fn get(&self, position: HexCoord) -> Option<&Tile> {
        self.tiles.get(&position)
    }

    /// Mutable tile at a position.
    pub fn get_mut(&mut self, position: HexCoord) -> Option<&mut Tile> {
        self.tiles.get_mut(&position)
    }

    /// Whether a position is on the map.
    #[must_use]
    pub fn contains(&self, position: HexCoord) -> bool {
        self.tiles.contains_key(&position)
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the map has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All positions in sorted order.
    pub fn positions(&self) -> impl Iterator<Item = HexCoord> + '_ {
        self.tiles.keys().copied()
    }

    /// All tiles in position order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// On-map tiles within `distance` of `center`.
    pub fn tiles_in_distance(
        &self,
        center: HexCoord,
        distance: u32,
    ) -> impl Iterator<Item = &Tile> {
        center
            .within(distance)
            .filter_map(move |position| self.tiles.get(&position))
    }

    /// Resolve every tile's derived properties against the ruleset.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] if a tile names a terrain,
    /// resource or improvement the ruleset does not define.
    pub fn set_transients(&mut self, ruleset: &Ruleset) -> Result<()> {
        for tile in self.tiles.values_mut() {
            tile.traits = Some(tile.compute_traits(ruleset)?);
        }
        Ok(())
    }

    /// Put a unit on a tile.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] if the position is off the map or
    /// already occupied.
    pub fn place_unit(&mut self, position: HexCoord, unit: MapUnit) -> Result<()> {
        let tile = self
            .tiles
            .get_mut(&position)
            .ok_or_else(|| GameError::InvalidState(format!("no tile at {position}")))?;

        if let Some(existing) = &tile.unit {
            return Err(GameError::InvalidState(format!(
                "tile {position} already holds {} of {}",
                existing.name, existing.owner
            )));
        }

        tile.unit = Some(unit);
        Ok(())
    }

    /// All units with their positions.
    pub fn units(&self) -> impl Iterator<Item = (HexCoord, &MapUnit)> {
        self.tiles
            .values()
            .filter_map(|tile| tile.unit.as_ref().map(|unit| (tile.position, unit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Terrain;

    fn plains_map(radius: u32) -> TileMap {
        TileMap::from_tiles(
            radius,
            HexCoord::ORIGIN
                .within(radius)
                .map(|position| Tile::new(position, "Plains")),
        )
    }

    fn terrain_ruleset() -> Ruleset {
        let mut ruleset = Ruleset::default();
        ruleset.terrains.insert(Terrain::new("Plains", TerrainType::Land));
        ruleset.terrains.insert(Terrain::new("Ocean", TerrainType::Water));
        let mut mountain = Terrain::new("Mountain", TerrainType::Land);
        mountain.impassable = true;
        ruleset.terrains.insert(mountain);
        let mut forest = Terrain::new("Forest", TerrainType::TerrainFeature);
        forest.movement_cost = 2;
        ruleset.terrains.insert(forest);
        ruleset
    }

    #[test]
    fn test_tiles_in_distance_clips_to_map() {
        let map = plains_map(2);
        assert_eq!(map.len(), 19);
        assert_eq!(map.tiles_in_distance(HexCoord::ORIGIN, 1).count(), 7);
        // Corner of the map: part of the neighbourhood is off-map.
        assert!(map.tiles_in_distance(HexCoord::new(2, 0), 1).count() < 7);
    }

    #[test]
    fn test_set_transients() {
        let mut map = plains_map(1);
        map.get_mut(HexCoord::new(1, 0)).unwrap().base_terrain = "Ocean".to_string();
        map.get_mut(HexCoord::new(0, 1)).unwrap().base_terrain = "Mountain".to_string();
        map.get_mut(HexCoord::new(-1, 0)).unwrap().terrain_feature = Some("Forest".to_string());

        assert!(!map.get(HexCoord::ORIGIN).unwrap().is_passable_land());
        map.set_transients(&terrain_ruleset()).unwrap();

        assert!(map.get(HexCoord::ORIGIN).unwrap().is_passable_land());
        assert!(!map.get(HexCoord::new(1, 0)).unwrap().is_passable_land());
        assert!(!map.get(HexCoord::new(0, 1)).unwrap().is_passable_land());
        let forest = map.get(HexCoord::new(-1, 0)).unwrap();
        assert_eq!(forest.top_terrain(), "Forest");
        assert_eq!(forest.traits().unwrap().movement_cost, 2);
    }

    #[test]
    fn test_set_transients_rejects_unknown_terrain() {
        let mut map = plains_map(1);
        map.get_mut(HexCoord::ORIGIN).unwrap().base_terrain = "Tundra".to_string();
        assert!(map.set_transients(&terrain_ruleset()).is_err());
    }

    #[test]
    fn test_place_unit_rejects_occupied_and_off_map() {
        let mut map = plains_map(1);
        let warrior = MapUnit::new("Warrior", "Barbarians", 2);

        map.place_unit(HexCoord::ORIGIN, warrior.clone()).unwrap();
        assert!(map.place_unit(HexCoord::ORIGIN, warrior.clone()).is_err());
        assert!(map.place_unit(HexCoord::new(5, 5), warrior).is_err());
        assert_eq!(map.units().count(), 1);
    }
}

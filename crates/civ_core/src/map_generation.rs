//! Procedural hex map generation.
//!
//! Generates a hexagonal map of a given radius around the origin:
//! - Base terrain picked uniformly from the ruleset's land and water terrains
//! - Occasional terrain features on base terrains that allow an overlay
//! - Sparse resources matched to the tile's top terrain

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::{ResourceType, TerrainType};
use crate::error::{GameError, Result};
use crate::hex::HexCoord;
use crate::ruleset::Ruleset;
use crate::tile_map::{Tile, TileMap};

/// Map configuration for procedural generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Map radius in tiles; the map holds every hex within this distance of
    /// the origin.
    pub radius: u32,
    /// Chance that an overlay-capable tile gets a terrain feature.
    pub feature_chance: f64,
    /// Chance, tried once per resource type, that a tile gets a resource.
    pub resource_chance: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            radius: 20,
            feature_chance: 0.3,
            resource_chance: 1.0 / 15.0,
        }
    }
}

impl MapConfig {
    /// Default configuration with the given radius.
    #[must_use]
    pub fn with_radius(radius: u32) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    /// Set the feature chance.
    #[must_use]
    pub fn with_feature_chance(mut self, chance: f64) -> Self {
        self.feature_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the resource chance.
    #[must_use]
    pub fn with_resource_chance(mut self, chance: f64) -> Self {
        self.resource_chance = chance.clamp(0.0, 1.0);
        self
    }
}

/// Largest supported map radius. A radius-128 map already holds 49 537
/// tiles.
pub const MAX_MAP_RADIUS: u32 = 128;

/// Resource types in the order they are rolled for.
const RESOURCE_ROLL_ORDER: [ResourceType; 3] = [
    ResourceType::Bonus,
    ResourceType::Strategic,
    ResourceType::Luxury,
];

/// Generate a map with the given configuration.
///
/// Transients are not set; the caller wires the map to the ruleset once the
/// session is assembled.
///
/// # Errors
///
/// Returns [`GameError::InvalidConfig`] if the radius exceeds
/// [`MAX_MAP_RADIUS`], or [`GameError::InvalidState`] if the ruleset
/// defines no base terrain.
pub fn generate_map<R: Rng + ?Sized>(
    config: &MapConfig,
    ruleset: &Ruleset,
    rng: &mut R,
) -> Result<TileMap> {
    if config.radius > MAX_MAP_RADIUS {
        return Err(GameError::InvalidConfig(format!(
            "map radius {} exceeds the maximum of {MAX_MAP_RADIUS}",
            config.radius
        )));
    }

    let base_terrains: Vec<_> = ruleset.base_terrains().collect();
    let mut tiles = Vec::new();

    // Every map has at least the origin tile, so an empty terrain list
    // always surfaces here.
    for position in HexCoord::ORIGIN.within(config.radius) {
        let Some(&base) = base_terrains.choose(rng) else {
            return Err(GameError::InvalidState(
                "ruleset defines no base terrain to generate a map from".to_string(),
            ));
        };
        let mut tile = Tile::new(position, base.name.clone());

        if base.can_have_overlay && rng.gen_bool(config.feature_chance) {
            tile.terrain_feature = random_feature(ruleset, &base.name, rng);
        }
        tile.resource = random_resource(config, ruleset, tile.top_terrain(), rng);
        tiles.push(tile);
    }

    let map = TileMap::from_tiles(config.radius, tiles);
    tracing::debug!(
        "Generated map of radius {} with {} tiles",
        config.radius,
        map.len()
    );
    Ok(map)
}

fn random_feature<R: Rng + ?Sized>(ruleset: &Ruleset, base: &str, rng: &mut R) -> Option<String> {
    let features: Vec<_> = ruleset
        .terrains
        .iter()
        .filter(|t| t.terrain_type == TerrainType::TerrainFeature)
        .filter(|t| t.occurs_on.iter().any(|name| name == base))
        .collect();
    features.choose(rng).map(|t| t.name.clone())
}

fn random_resource<R: Rng + ?Sized>(
    config: &MapConfig,
    ruleset: &Ruleset,
    terrain: &str,
    rng: &mut R,
) -> Option<String> {
    for resource_type in RESOURCE_ROLL_ORDER {
        if rng.gen_bool(config.resource_chance) {
            let candidates: Vec<_> = ruleset
                .tile_resources
                .iter()
                .filter(|r| r.resource_type == resource_type)
                .filter(|r| r.terrains_can_be_found_on.iter().any(|t| t == terrain))
                .collect();
            return candidates.choose(rng).map(|r| r.name.clone());
        }
    }
    None
}

//! Terrain, tile resource and tile improvement definitions.

use serde::{Deserialize, Serialize};

/// Layer a terrain occupies on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TerrainType {
    /// Base land terrain (grassland, plains, ...).
    #[default]
    Land,
    /// Base water terrain (ocean, coast, ...).
    Water,
    /// Overlay on top of a base terrain (forest, jungle, ...).
    TerrainFeature,
}

/// Data-driven terrain definition.
///
/// # Example RON
///
/// ```ron
/// Terrain(
///     name: "Forest",
///     terrain_type: TerrainFeature,
///     production: 1,
///     movement_cost: 2,
///     occurs_on: ["Grassland", "Plains"],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terrain {
    /// Unique terrain name.
    pub name: String,

    /// Which layer this terrain occupies.
    #[serde(default)]
    pub terrain_type: TerrainType,

    /// Food yield.
    #[serde(default)]
    pub food: u32,

    /// Production yield.
    #[serde(default)]
    pub production: u32,

    /// Gold yield.
    #[serde(default)]
    pub gold: u32,

    /// Movement points needed to enter.
    #[serde(default = "default_movement_cost")]
    pub movement_cost: u32,

    /// Whether units can never enter.
    #[serde(default)]
    pub impassable: bool,

    /// Whether a terrain feature may be placed on this base terrain.
    #[serde(default)]
    pub can_have_overlay: bool,

    /// Base terrains this feature can appear on (features only).
    #[serde(default)]
    pub occurs_on: Vec<String>,
}

const fn default_movement_cost() -> u32 {
    1
}

impl Terrain {
    /// Create a terrain of the given layer with default yields.
    #[must_use]
    pub fn new(name: impl Into<String>, terrain_type: TerrainType) -> Self {
        Self {
            name: name.into(),
            terrain_type,
            food: 0,
            production: 0,
            gold: 0,
            movement_cost: default_movement_cost(),
            impassable: false,
            can_have_overlay: false,
            occurs_on: Vec::new(),
        }
    }

    /// Whether this is a base terrain (land or water) rather than a feature.
    #[must_use]
    pub fn is_base(&self) -> bool {
        self.terrain_type != TerrainType::TerrainFeature
    }
}

/// Resource category, used to weight map generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    /// Yield bonus, no trade value.
    Bonus,
    /// Required for some units and buildings.
    Strategic,
    /// Provides happiness.
    Luxury,
}

/// Resource that can appear on a tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileResource {
    /// Unique resource name.
    pub name: String,

    /// Resource category.
    pub resource_type: ResourceType,

    /// Terrains (base or feature) where this resource may be generated.
    #[serde(default)]
    pub terrains_can_be_found_on: Vec<String>,

    /// Improvement that exploits this resource.
    #[serde(default)]
    pub improvement: Option<String>,
}

/// Improvement that workers can build on a tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileImprovement {
    /// Unique improvement name.
    pub name: String,

    /// Terrains the improvement can be built on.
    #[serde(default)]
    pub terrains_can_be_built_on: Vec<String>,

    /// Technology needed to build it.
    #[serde(default)]
    pub tech_required: Option<String>,

    /// Worker turns needed.
    #[serde(default)]
    pub turns_to_build: u32,
}

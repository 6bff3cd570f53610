//! Test fixtures and helpers.
//!
//! A small but complete ruleset and world configurations for consistent
//! testing. Numbers follow the classic ancient era so test expectations
//! read naturally (a Granary costs 20, the Tradition branch completes
//! with "Tradition Complete").

use std::sync::Arc;

use civ_core::data::{
    BasicHelp, BuildingData, CivilizationData, PolicyBranchData, PolicyData, ResourceType,
    TechColumnData, TechnologyData, Terrain, TerrainType, TileImprovement, TileResource,
    TutorialData, UnitData, UnitType,
};
use civ_core::ruleset::{link_ruleset, RawRuleset, Ruleset};
use civ_core::world_seeder::WorldConfig;

/// Seed used by fixtures that need reproducible worlds.
pub const TEST_SEED: u64 = 42;

/// Create a terrain with an overlay flag.
#[must_use]
pub fn terrain(name: &str, terrain_type: TerrainType, can_have_overlay: bool) -> Terrain {
    let mut terrain = Terrain::new(name, terrain_type);
    terrain.can_have_overlay = can_have_overlay;
    terrain
}

/// Create a unit definition.
#[must_use]
pub fn unit(
    name: &str,
    unit_type: UnitType,
    strength: u32,
    required_tech: Option<&str>,
) -> UnitData {
    UnitData {
        name: name.to_string(),
        description: String::new(),
        unit_type,
        movement: 2,
        strength,
        ranged_strength: 0,
        cost: strength * 5,
        required_tech: required_tech.map(str::to_string),
    }
}

/// Create a civilization with city names.
#[must_use]
pub fn civilization(name: &str, cities: &[&str]) -> CivilizationData {
    let mut civ = CivilizationData::named(name);
    civ.city_names = cities.iter().map(|c| (*c).to_string()).collect();
    civ
}

/// Base terrains and features.
#[must_use]
pub fn sample_terrains() -> Vec<Terrain> {
    let mut mountain = terrain("Mountain", TerrainType::Land, false);
    mountain.impassable = true;

    let mut forest = terrain("Forest", TerrainType::TerrainFeature, false);
    forest.movement_cost = 2;
    forest.occurs_on = vec!["Grassland".to_string(), "Plains".to_string()];

    vec![
        terrain("Grassland", TerrainType::Land, true),
        terrain("Plains", TerrainType::Land, true),
        terrain("Desert", TerrainType::Land, false),
        terrain("Ocean", TerrainType::Water, false),
        mountain,
        forest,
    ]
}

/// Two tech columns: Agriculture, then Pottery and friends at 10/20/50.
#[must_use]
pub fn sample_tech_columns() -> Vec<TechColumnData> {
    let mut ancient =
        TechColumnData::new(5, 15, 40).with_tech(TechnologyData::named("Agriculture"));
    ancient.era = "Ancient".to_string();

    let mut classical = TechColumnData::new(10, 20, 50)
        .with_tech(TechnologyData::named("Pottery").requiring(["Agriculture"]))
        .with_tech(TechnologyData::named("Animal Husbandry").requiring(["Agriculture"]))
        .with_tech(TechnologyData::named("Bronze Working"));
    classical.column_number = 1;
    classical.era = "Ancient".to_string();

    vec![ancient, classical]
}

/// Buildings covering every cost resolution case.
#[must_use]
pub fn sample_buildings() -> Vec<BuildingData> {
    vec![
        BuildingData::named("Palace").with_cost(100),
        BuildingData::named("Granary").with_required_tech("Pottery"),
        BuildingData::named("Hanging Gardens")
            .with_required_tech("Pottery")
            .wonder(),
        BuildingData::named("Barracks")
            .with_required_tech("Bronze Working")
            .with_cost(40),
    ]
}

/// Tradition (with an explicit prerequisite) and Liberty.
#[must_use]
pub fn sample_policy_branches() -> Vec<PolicyBranchData> {
    let mut tradition = PolicyBranchData::with_policies("Tradition", ["Aristocracy"]);
    tradition
        .policies
        .push(PolicyData::named("Legalism").requiring(["Aristocracy"]));
    tradition.policies.push(PolicyData::named("Tradition Finisher"));

    let liberty = PolicyBranchData::with_policies(
        "Liberty",
        ["Collective Rule", "Citizenship", "Liberty Finisher"],
    );

    vec![tradition, liberty]
}

/// Tutorial text with multi-line paragraphs.
#[must_use]
pub fn sample_tutorials() -> TutorialData {
    let mut tutorials = TutorialData::new();
    tutorials.insert(
        "Introduction".to_string(),
        vec![
            vec!["Welcome to the world.".to_string(), "Your people await.".to_string()],
            vec!["Found a city to begin.".to_string()],
        ],
    );
    tutorials.insert(
        "CityFounded".to_string(),
        vec![vec!["Your first city stands.".to_string()]],
    );
    tutorials
}

/// The complete unlinked sample ruleset.
#[must_use]
pub fn sample_raw_ruleset() -> RawRuleset {
    RawRuleset {
        buildings: sample_buildings(),
        terrains: sample_terrains(),
        tile_resources: vec![
            TileResource {
                name: "Cattle".to_string(),
                resource_type: ResourceType::Bonus,
                terrains_can_be_found_on: vec!["Grassland".to_string()],
                improvement: Some("Pasture".to_string()),
            },
            TileResource {
                name: "Iron".to_string(),
                resource_type: ResourceType::Strategic,
                terrains_can_be_found_on: vec!["Plains".to_string(), "Desert".to_string()],
                improvement: None,
            },
            TileResource {
                name: "Silk".to_string(),
                resource_type: ResourceType::Luxury,
                terrains_can_be_found_on: vec!["Forest".to_string()],
                improvement: None,
            },
        ],
        tile_improvements: vec![
            TileImprovement {
                name: "Farm".to_string(),
                terrains_can_be_built_on: vec!["Grassland".to_string(), "Plains".to_string()],
                tech_required: Some("Agriculture".to_string()),
                turns_to_build: 6,
            },
            TileImprovement {
                name: "Pasture".to_string(),
                terrains_can_be_built_on: vec!["Grassland".to_string()],
                tech_required: Some("Animal Husbandry".to_string()),
                turns_to_build: 7,
            },
        ],
        helps: vec![BasicHelp {
            name: "Movement".to_string(),
            description: "Units spend movement points to enter tiles.".to_string(),
        }],
        units: vec![
            unit("Warrior", UnitType::Melee, 8, None),
            unit("Spearman", UnitType::Melee, 11, Some("Bronze Working")),
            unit("Worker", UnitType::Civilian, 0, None),
        ],
        policy_branches: sample_policy_branches(),
        civilizations: vec![
            civilization("Babylon", &["Babylon", "Akkad"]),
            civilization("Greece", &["Athens", "Sparta"]),
            civilization("China", &["Beijing"]),
            civilization("Egypt", &[]),
        ],
        tech_columns: sample_tech_columns(),
        tutorials: sample_tutorials(),
    }
}

/// The sample ruleset, linked.
///
/// # Panics
///
/// Panics if the fixture fails to link, which is a bug in the fixture.
#[must_use]
pub fn sample_ruleset() -> Arc<Ruleset> {
    Arc::new(link_ruleset(sample_raw_ruleset()).expect("sample ruleset links"))
}

/// The classic setup with a fixed seed.
#[must_use]
pub fn classic_world_config() -> WorldConfig {
    WorldConfig::default().with_seed(TEST_SEED)
}

/// A small world that seeds quickly.
#[must_use]
pub fn small_world_config() -> WorldConfig {
    WorldConfig::default()
        .with_map_radius(8)
        .with_exclusion_radius(3)
        .with_barbarian_units(3)
        .with_seed(TEST_SEED)
}

//! Raw ruleset tables.
//!
//! This module contains pure data structures as they are authored in the
//! ruleset RON files, before the linking pass fills in derived fields.
//!
//! **Note:** This module contains no IO - it only defines data types.
//! File loading is handled by [`crate::ruleset::RonDirectorySource`].

mod building_data;
mod civilization_data;
mod policy_data;
mod tech_data;
mod terrain_data;
mod unit_data;

pub use building_data::BuildingData;
pub use civilization_data::{BasicHelp, CivilizationData};
pub use policy_data::{PolicyBranchData, PolicyData};
pub use tech_data::{TechColumnData, TechnologyData};
pub use terrain_data::{ResourceType, Terrain, TerrainType, TileImprovement, TileResource};
pub use unit_data::{UnitData, UnitType};

/// Raw tutorial text: tutorial key to an ordered list of line groups.
pub type TutorialData = std::collections::BTreeMap<String, Vec<Vec<String>>>;

/// A ruleset entity identified by its unique name.
pub trait Named {
    /// The entity's name, used as its lookup key.
    fn name(&self) -> &str;
}

macro_rules! impl_named {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Named for $ty {
                fn name(&self) -> &str {
                    &self.name
                }
            }
        )*
    };
}

impl_named!(
    BuildingData,
    CivilizationData,
    BasicHelp,
    PolicyBranchData,
    Terrain,
    TileResource,
    TileImprovement,
    UnitData,
);

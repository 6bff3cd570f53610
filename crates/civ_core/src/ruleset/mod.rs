//! The linked ruleset: every rule entity of the game, indexed by name.
//!
//! A [`Ruleset`] is produced exactly once from a [`RawRuleset`] by
//! [`link_ruleset`], and is read-only afterwards. Share it behind an
//! [`std::sync::Arc`] rather than cloning it.

mod linker;
mod registry;
mod source;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::{
    BasicHelp, BuildingData, CivilizationData, Named, PolicyBranchData, TechColumnData, Terrain,
    TileImprovement, TileResource, TutorialData, UnitData,
};
use crate::error::Result;

pub use linker::{completion_policy_name, link_ruleset, TUTORIAL_LINE_BREAK};
pub use registry::NamedRegistry;
pub use source::{RonDirectorySource, RulesetKind, RulesetSource};

/// Index of a column in [`Ruleset::tech_columns`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TechColumnId(pub usize);

/// A linked tech column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechColumn {
    /// Column index in the tech tree display.
    pub column_number: u32,
    /// Era label.
    pub era: String,
    /// Research cost of the column's technologies.
    pub tech_cost: u32,
    /// Default building cost.
    pub building_cost: u32,
    /// Default wonder cost.
    pub wonder_cost: u32,
    /// Names of the column's technologies, in source order.
    pub techs: Vec<String>,
}

/// A linked technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Technology {
    /// Unique technology name.
    pub name: String,
    /// Civilopedia text.
    pub description: String,
    /// Technologies that must be researched first.
    pub prerequisites: Vec<String>,
    /// Display row.
    pub row: u32,
    /// Research cost, taken from the column.
    pub cost: u32,
    /// Owning column.
    pub column: TechColumnId,
}

/// A linked policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    /// Policy name. The last policy of a branch is `"<branch> Complete"`.
    pub name: String,
    /// Effect description.
    pub description: String,
    /// Name of the owning branch.
    pub branch: String,
    /// Prerequisites; never empty after linking.
    pub requires: Vec<String>,
    /// Display row.
    pub row: u32,
    /// Display column.
    pub column: u32,
}

/// A linked policy branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyBranch {
    /// Branch name.
    pub name: String,
    /// Opener description.
    pub description: String,
    /// Category tag; always the branch's own name.
    pub branch: String,
    /// Prerequisites for opening the branch; empty after linking.
    pub requires: Vec<String>,
    /// Policies in display order.
    pub policies: Vec<Policy>,
}

impl PolicyBranch {
    /// The synthetic completion policy, if the branch has any policies.
    #[must_use]
    pub fn completion_policy(&self) -> Option<&Policy> {
        self.policies.last()
    }
}

impl Named for Technology {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for PolicyBranch {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Ruleset tables as loaded, before linking.
#[derive(Debug, Clone, Default)]
pub struct RawRuleset {
    /// Buildings table.
    pub buildings: Vec<BuildingData>,
    /// Terrains table.
    pub terrains: Vec<Terrain>,
    /// Tile resources table.
    pub tile_resources: Vec<TileResource>,
    /// Tile improvements table.
    pub tile_improvements: Vec<TileImprovement>,
    /// Help entries table.
    pub helps: Vec<BasicHelp>,
    /// Units table.
    pub units: Vec<UnitData>,
    /// Policy branches table.
    pub policy_branches: Vec<PolicyBranchData>,
    /// Civilizations table.
    pub civilizations: Vec<CivilizationData>,
    /// Tech columns table.
    pub tech_columns: Vec<TechColumnData>,
    /// Tutorial text.
    pub tutorials: TutorialData,
}

impl RawRuleset {
    /// Load every table from a source.
    ///
    /// # Errors
    ///
    /// Returns the first table load error.
    pub fn load(source: &impl RulesetSource) -> Result<Self> {
        let raw = Self {
            buildings: source.load_table(RulesetKind::Buildings)?,
            terrains: source.load_table(RulesetKind::Terrains)?,
            tile_resources: source.load_table(RulesetKind::TileResources)?,
            tile_improvements: source.load_table(RulesetKind::TileImprovements)?,
            helps: source.load_table(RulesetKind::BasicHelp)?,
            units: source.load_table(RulesetKind::Units)?,
            policy_branches: source.load_table(RulesetKind::Policies)?,
            civilizations: source.load_table(RulesetKind::Civilizations)?,
            tech_columns: source.load_table(RulesetKind::Techs)?,
            tutorials: source.load_table(RulesetKind::Tutorials)?,
        };

        tracing::info!(
            "Loaded ruleset tables: {} buildings, {} terrains, {} units, {} tech columns, {} policy branches",
            raw.buildings.len(),
            raw.terrains.len(),
            raw.units.len(),
            raw.tech_columns.len(),
            raw.policy_branches.len()
        );

        Ok(raw)
    }
}

/// The linked, cross-referenced ruleset.
#[derive(Debug, Clone, Default)]
pub struct Ruleset {
    /// Buildings; costs resolved where a required technology exists.
    pub buildings: NamedRegistry<BuildingData>,
    /// Base terrains and features.
    pub terrains: NamedRegistry<Terrain>,
    /// Tile resources.
    pub tile_resources: NamedRegistry<TileResource>,
    /// Tile improvements.
    pub tile_improvements: NamedRegistry<TileImprovement>,
    /// Civilopedia help.
    pub helps: NamedRegistry<BasicHelp>,
    /// Unit types.
    pub units: NamedRegistry<UnitData>,
    /// Policy branches.
    pub policy_branches: NamedRegistry<PolicyBranch>,
    /// Civilizations.
    pub civilizations: NamedRegistry<CivilizationData>,
    /// Technologies.
    pub technologies: NamedRegistry<Technology>,
    /// Tech columns in source order.
    pub tech_columns: Vec<TechColumn>,
    /// Tutorial key to paragraphs.
    pub tutorials: BTreeMap<String, Vec<String>>,
}

impl Ruleset {
    /// Look up a technology.
    #[must_use]
    pub fn technology(&self, name: &str) -> Option<&Technology> {
        self.technologies.get(name)
    }

    /// Look up a building.
    #[must_use]
    pub fn building(&self, name: &str) -> Option<&BuildingData> {
        self.buildings.get(name)
    }

    /// The column a technology belongs to.
    #[must_use]
    pub fn column_of(&self, tech: &Technology) -> Option<&TechColumn> {
        self.tech_columns.get(tech.column.0)
    }

    /// Find a policy in any branch.
    #[must_use]
    pub fn policy(&self, name: &str) -> Option<&Policy> {
        self.policy_branches
            .iter()
            .flat_map(|branch| branch.policies.iter())
            .find(|policy| policy.name == name)
    }

    /// Base terrains (land and water), in ruleset order.
    pub fn base_terrains(&self) -> impl Iterator<Item = &Terrain> {
        self.terrains.iter().filter(|t| t.is_base())
    }
}

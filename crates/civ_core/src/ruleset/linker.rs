//! The one-shot linking pass from raw tables to a [`Ruleset`].
//!
//! Linking indexes every table by name, derives technology costs and
//! columns, fills in default building costs, and chains policies to their
//! branches. Any name reference that does not resolve is fatal: it means
//! the ruleset distribution is corrupt or mismatched.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use super::{
    NamedRegistry, Policy, PolicyBranch, RawRuleset, RulesetKind, Ruleset, TechColumn,
    TechColumnId, Technology,
};
use crate::data::{BuildingData, Named, PolicyBranchData, TechColumnData, TutorialData};
use crate::error::{GameError, Result};

/// Separator used when joining a tutorial line group into one paragraph.
pub const TUTORIAL_LINE_BREAK: &str = "\r\n";

/// Name given to the last policy of a branch.
#[must_use]
pub fn completion_policy_name(branch: &str) -> String {
    format!("{branch} Complete")
}

/// Link raw tables into a ruleset.
///
/// # Errors
///
/// Returns [`GameError::DanglingReference`] if a building, technology,
/// unit, improvement, resource or terrain names an entity that does not
/// exist.
pub fn link_ruleset(raw: RawRuleset) -> Result<Ruleset> {
    let RawRuleset {
        buildings,
        terrains,
        tile_resources,
        tile_improvements,
        helps,
        units,
        policy_branches,
        civilizations,
        tech_columns,
        tutorials,
    } = raw;

    let mut ruleset = Ruleset {
        buildings: index_table(RulesetKind::Buildings, buildings),
        terrains: index_table(RulesetKind::Terrains, terrains),
        tile_resources: index_table(RulesetKind::TileResources, tile_resources),
        tile_improvements: index_table(RulesetKind::TileImprovements, tile_improvements),
        helps: index_table(RulesetKind::BasicHelp, helps),
        units: index_table(RulesetKind::Units, units),
        civilizations: index_table(RulesetKind::Civilizations, civilizations),
        tutorials: join_tutorials(tutorials),
        ..Ruleset::default()
    };

    link_technologies(&mut ruleset, tech_columns);
    resolve_building_costs(&mut ruleset)?;
    ruleset.policy_branches = index_table(
        RulesetKind::Policies,
        policy_branches.into_iter().map(link_policy_branch),
    );
    validate_references(&ruleset)?;

    info!(
        "Linked ruleset: {} technologies in {} columns, {} buildings, {} policy branches, {} tutorials",
        ruleset.technologies.len(),
        ruleset.tech_columns.len(),
        ruleset.buildings.len(),
        ruleset.policy_branches.len(),
        ruleset.tutorials.len()
    );

    Ok(ruleset)
}

fn index_table<T: Named>(
    kind: RulesetKind,
    items: impl IntoIterator<Item = T>,
) -> NamedRegistry<T> {
    let mut registry = NamedRegistry::new();
    for item in items {
        if let Some(previous) = registry.insert(item) {
            warn!(
                "{} entry '{}' defined more than once; later definition wins",
                kind.file_stem(),
                previous.name()
            );
        }
    }
    registry
}

fn join_tutorials(tutorials: TutorialData) -> BTreeMap<String, Vec<String>> {
    tutorials
        .into_iter()
        .map(|(key, groups)| {
            let paragraphs = groups
                .into_iter()
                .map(|lines| lines.join(TUTORIAL_LINE_BREAK))
                .collect();
            (key, paragraphs)
        })
        .collect()
}

fn link_technologies(ruleset: &mut Ruleset, columns: Vec<TechColumnData>) {
    for (index, column) in columns.into_iter().enumerate() {
        let id = TechColumnId(index);
        let mut names = Vec::with_capacity(column.techs.len());

        for tech in column.techs {
            names.push(tech.name.clone());
            let linked = Technology {
                name: tech.name,
                description: tech.description,
                prerequisites: tech.prerequisites,
                row: tech.row,
                cost: column.tech_cost,
                column: id,
            };
            if let Some(previous) = ruleset.technologies.insert(linked) {
                warn!(
                    "Technology '{}' defined more than once; later definition wins",
                    previous.name
                );
            }
        }

        debug!(
            "Tech column {} ({}): {} technologies at cost {}",
            column.column_number,
            column.era,
            names.len(),
            column.tech_cost
        );

        ruleset.tech_columns.push(TechColumn {
            column_number: column.column_number,
            era: column.era,
            tech_cost: column.tech_cost,
            building_cost: column.building_cost,
            wonder_cost: column.wonder_cost,
            techs: names,
        });
    }
}

fn resolve_building_costs(ruleset: &mut Ruleset) -> Result<()> {
    let technologies = &ruleset.technologies;
    let columns = &ruleset.tech_columns;

    for building in ruleset.buildings.values_mut() {
        let Some(tech_name) = building.required_tech.as_deref() else {
            continue;
        };

        let column = technologies
            .get(tech_name)
            .and_then(|tech| columns.get(tech.column.0))
            .ok_or_else(|| dangling(&building.name, "technology", tech_name))?;

        if building.resolved_cost().is_none() {
            building.cost = Some(default_cost(building, column));
        }
    }

    Ok(())
}

fn default_cost(building: &BuildingData, column: &TechColumn) -> u32 {
    if building.is_wonder {
        column.wonder_cost
    } else {
        column.building_cost
    }
}

fn link_policy_branch(data: PolicyBranchData) -> PolicyBranch {
    let branch_name = data.name;

    let mut policies: Vec<Policy> = data
        .policies
        .into_iter()
        .map(|policy| Policy {
            name: policy.name,
            description: policy.description,
            branch: branch_name.clone(),
            requires: policy
                .requires
                .filter(|requires| !requires.is_empty())
                .unwrap_or_else(|| vec![branch_name.clone()]),
            row: policy.row,
            column: policy.column,
        })
        .collect();

    match policies.last_mut() {
        Some(last) => last.name = completion_policy_name(&branch_name),
        None => warn!("Policy branch '{}' has no policies", branch_name),
    }

    PolicyBranch {
        description: data.description,
        branch: branch_name.clone(),
        requires: Vec::new(),
        name: branch_name,
        policies,
    }
}

fn validate_references(ruleset: &Ruleset) -> Result<()> {
    for tech in ruleset.technologies.iter() {
        for prerequisite in &tech.prerequisites {
            if !ruleset.technologies.contains(prerequisite) {
                return Err(dangling(&tech.name, "technology", prerequisite));
            }
        }
    }

    for unit in ruleset.units.iter() {
        if let Some(tech) = &unit.required_tech {
            if !ruleset.technologies.contains(tech) {
                return Err(dangling(&unit.name, "technology", tech));
            }
        }
    }

    for improvement in ruleset.tile_improvements.iter() {
        if let Some(tech) = &improvement.tech_required {
            if !ruleset.technologies.contains(tech) {
                return Err(dangling(&improvement.name, "technology", tech));
            }
        }
    }

    for resource in ruleset.tile_resources.iter() {
        if let Some(improvement) = &resource.improvement {
            if !ruleset.tile_improvements.contains(improvement) {
                return Err(dangling(&resource.name, "improvement", improvement));
            }
        }
    }

    for terrain in ruleset.terrains.iter() {
        for base in &terrain.occurs_on {
            if !ruleset.terrains.contains(base) {
                return Err(dangling(&terrain.name, "terrain", base));
            }
        }
    }

    Ok(())
}

fn dangling(entity: &str, field: &'static str, target: &str) -> GameError {
    GameError::DanglingReference {
        entity: entity.to_string(),
        field,
        target: target.to_string(),
    }
}

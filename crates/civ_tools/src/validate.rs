//! Ruleset validation.

use std::fmt;
use std::path::Path;

use civ_core::error::Result;
use civ_core::ruleset::{link_ruleset, RawRuleset, RonDirectorySource, Ruleset};

/// Counts of a linked ruleset, plus non-fatal findings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Technologies.
    pub technologies: usize,
    /// Tech columns.
    pub tech_columns: usize,
    /// Buildings.
    pub buildings: usize,
    /// Units.
    pub units: usize,
    /// Terrains, base and feature.
    pub terrains: usize,
    /// Policy branches.
    pub policy_branches: usize,
    /// Civilizations.
    pub civilizations: usize,
    /// Tutorial keys.
    pub tutorials: usize,
    /// Problems that do not stop the game from starting.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn from_ruleset(ruleset: &Ruleset) -> Self {
        let mut warnings = Vec::new();

        for building in ruleset.buildings.iter() {
            if building.resolved_cost().is_none() {
                warnings.push(format!(
                    "building '{}' has no cost and no required technology",
                    building.name
                ));
            }
        }

        for branch in ruleset.policy_branches.iter() {
            if branch.policies.is_empty() {
                warnings.push(format!("policy branch '{}' has no policies", branch.name));
            }
        }

        if ruleset.base_terrains().next().is_none() {
            warnings.push("no base terrain; maps cannot be generated".to_string());
        }

        Self {
            technologies: ruleset.technologies.len(),
            tech_columns: ruleset.tech_columns.len(),
            buildings: ruleset.buildings.len(),
            units: ruleset.units.len(),
            terrains: ruleset.terrains.len(),
            policy_branches: ruleset.policy_branches.len(),
            civilizations: ruleset.civilizations.len(),
            tutorials: ruleset.tutorials.len(),
            warnings,
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} technologies in {} columns, {} buildings, {} units, {} terrains, \
             {} policy branches, {} civilizations, {} tutorials, {} warnings",
            self.technologies,
            self.tech_columns,
            self.buildings,
            self.units,
            self.terrains,
            self.policy_branches,
            self.civilizations,
            self.tutorials,
            self.warnings.len()
        )
    }
}

/// Load and link every ruleset table in a directory.
///
/// # Errors
///
/// Returns the first load or link error.
pub fn validate_data_directory(path: &Path) -> Result<ValidationReport> {
    let raw = RawRuleset::load(&RonDirectorySource::new(path))?;
    let ruleset = link_ruleset(raw)?;
    Ok(ValidationReport::from_ruleset(&ruleset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use civ_core::error::GameError;
    use civ_core::ruleset::RulesetKind;
    use std::path::PathBuf;

    fn bundled_ruleset_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../civ_headless/assets/ruleset")
    }

    fn copy_bundled_ruleset(to: &Path) {
        for kind in RulesetKind::ALL {
            let file = format!("{}.ron", kind.file_stem());
            std::fs::copy(bundled_ruleset_dir().join(&file), to.join(&file)).unwrap();
        }
    }

    #[test]
    fn test_bundled_ruleset_is_valid() {
        let report = validate_data_directory(&bundled_ruleset_dir()).unwrap();
        assert_eq!(report.tech_columns, 4);
        assert_eq!(report.civilizations, 5);
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    }

    #[test]
    fn test_dangling_reference_fails() {
        let dir = tempfile::tempdir().unwrap();
        copy_bundled_ruleset(dir.path());
        std::fs::write(
            dir.path().join("Buildings.ron"),
            r#"[(name: "Granary", required_tech: "Potery")]"#,
        )
        .unwrap();

        assert!(matches!(
            validate_data_directory(dir.path()),
            Err(GameError::DanglingReference { .. })
        ));
    }

    #[test]
    fn test_uncosted_building_warns() {
        let dir = tempfile::tempdir().unwrap();
        copy_bundled_ruleset(dir.path());
        std::fs::write(dir.path().join("Buildings.ron"), r#"[(name: "Folly")]"#).unwrap();

        let report = validate_data_directory(dir.path()).unwrap();
        assert_eq!(report.buildings, 1);
        assert_eq!(report.warnings.len(), 1);
    }
}

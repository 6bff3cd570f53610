//! Loading raw ruleset tables.

use std::path::{Path, PathBuf};

use ron::extensions::Extensions;
use serde::de::DeserializeOwned;

use crate::error::{GameError, Result};

/// The ruleset tables, one per authored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RulesetKind {
    /// Buildings and wonders.
    Buildings,
    /// Base terrains and terrain features.
    Terrains,
    /// Tile resources.
    TileResources,
    /// Tile improvements.
    TileImprovements,
    /// Civilopedia help entries.
    BasicHelp,
    /// Unit types.
    Units,
    /// Policy branches.
    Policies,
    /// Civilizations.
    Civilizations,
    /// Tech columns with their technologies.
    Techs,
    /// Tutorial text.
    Tutorials,
}

impl RulesetKind {
    /// Every table, in load order.
    pub const ALL: [Self; 10] = [
        Self::Buildings,
        Self::Terrains,
        Self::TileResources,
        Self::TileImprovements,
        Self::BasicHelp,
        Self::Units,
        Self::Policies,
        Self::Civilizations,
        Self::Techs,
        Self::Tutorials,
    ];

    /// File stem of the table.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Buildings => "Buildings",
            Self::Terrains => "Terrains",
            Self::TileResources => "TileResources",
            Self::TileImprovements => "TileImprovements",
            Self::BasicHelp => "BasicHelp",
            Self::Units => "Units",
            Self::Policies => "Policies",
            Self::Civilizations => "Civilizations",
            Self::Techs => "Techs",
            Self::Tutorials => "Tutorials",
        }
    }
}

/// Provider of raw ruleset tables.
pub trait RulesetSource {
    /// Load and deserialize one table.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DataLoad`] if the table cannot be read or parsed.
    fn load_table<T: DeserializeOwned>(&self, kind: RulesetKind) -> Result<T>;
}

/// Reads `<dir>/<Kind>.ron` files.
///
/// Optional fields may be written without `Some(..)`.
#[derive(Debug, Clone)]
pub struct RonDirectorySource {
    dir: PathBuf,
}

impl RonDirectorySource {
    /// Create a source rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the tables are read from.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a table file.
    #[must_use]
    pub fn path_for(&self, kind: RulesetKind) -> PathBuf {
        self.dir.join(format!("{}.ron", kind.file_stem()))
    }
}

impl RulesetSource for RonDirectorySource {
    fn load_table<T: DeserializeOwned>(&self, kind: RulesetKind) -> Result<T> {
        let path = self.path_for(kind);
        let path_str = path.display().to_string();

        let contents = std::fs::read_to_string(&path).map_err(|e| GameError::DataLoad {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        let table = ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(&contents)
            .map_err(|e| GameError::DataLoad {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!("Loaded ruleset table {}", path_str);
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BuildingData;

    #[test]
    fn test_file_stems_are_unique() {
        let mut stems: Vec<_> = RulesetKind::ALL.iter().map(|k| k.file_stem()).collect();
        stems.sort_unstable();
        stems.dedup();
        assert_eq!(stems.len(), RulesetKind::ALL.len());
    }

    #[test]
    fn test_load_table_with_implicit_some() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("Buildings.ron"),
            r#"[(name: "Granary", required_tech: "Pottery"), (name: "Palace", cost: 100)]"#,
        )
        .unwrap();

        let source = RonDirectorySource::new(dir.path());
        let buildings: Vec<BuildingData> = source.load_table(RulesetKind::Buildings).unwrap();

        assert_eq!(buildings.len(), 2);
        assert_eq!(buildings[0].required_tech.as_deref(), Some("Pottery"));
        assert_eq!(buildings[1].cost, Some(100));
    }

    #[test]
    fn test_missing_table_is_data_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = RonDirectorySource::new(dir.path());

        let result: Result<Vec<BuildingData>> = source.load_table(RulesetKind::Buildings);
        assert!(matches!(result, Err(GameError::DataLoad { .. })));
    }

    #[test]
    fn test_malformed_table_is_data_load_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Buildings.ron"), "[(name: ").unwrap();
        let source = RonDirectorySource::new(dir.path());

        let result: Result<Vec<BuildingData>> = source.load_table(RulesetKind::Buildings);
        assert!(matches!(result, Err(GameError::DataLoad { .. })));
    }
}

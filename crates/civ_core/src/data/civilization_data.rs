//! Civilization definitions and civilopedia help entries.

use serde::{Deserialize, Serialize};

/// A playable civilization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilizationData {
    /// Unique civilization name.
    pub name: String,

    /// Adjective form ("Babylonian").
    #[serde(default)]
    pub adjective: String,

    /// Leader shown in diplomacy.
    #[serde(default)]
    pub leader_name: String,

    /// City names in founding order; the first is the capital.
    #[serde(default)]
    pub city_names: Vec<String>,
}

impl CivilizationData {
    /// Create a civilization entry with only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            adjective: String::new(),
            leader_name: String::new(),
            city_names: Vec::new(),
        }
    }

    /// Name for this civilization's capital.
    #[must_use]
    pub fn capital_name(&self) -> String {
        self.city_names
            .first()
            .cloned()
            .unwrap_or_else(|| format!("{} Capital", self.name))
    }
}

/// Basic civilopedia help entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicHelp {
    /// Entry title.
    pub name: String,

    /// Entry text.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capital_name() {
        let mut civ = CivilizationData::named("Babylon");
        assert_eq!(civ.capital_name(), "Babylon Capital");

        civ.city_names = vec!["Babylon".to_string(), "Akkad".to_string()];
        assert_eq!(civ.capital_name(), "Babylon");
    }
}

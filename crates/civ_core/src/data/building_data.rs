//! Building data structures for data-driven building definitions.

use serde::{Deserialize, Serialize};

/// Data-driven building definition.
///
/// `cost` is optional in the authored data: buildings that leave it out
/// take their cost from the technology column of `required_tech` during
/// linking.
///
/// # Example RON
///
/// ```ron
/// BuildingData(
///     name: "Granary",
///     description: "Stores food for the city",
///     required_tech: "Pottery",
///     maintenance: 1,
///     food: 2,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingData {
    /// Unique building name.
    pub name: String,

    /// Flavour text shown in the civilopedia.
    #[serde(default)]
    pub description: String,

    /// Production cost. `None` until resolved by the linker.
    ///
    /// An authored `0` is treated the same as an absent value.
    #[serde(default)]
    pub cost: Option<u32>,

    /// Whether this building is a world wonder.
    #[serde(default)]
    pub is_wonder: bool,

    /// Technology that unlocks this building.
    #[serde(default)]
    pub required_tech: Option<String>,

    /// Gold upkeep per turn.
    #[serde(default)]
    pub maintenance: u32,

    /// Food yield.
    #[serde(default)]
    pub food: u32,

    /// Production yield.
    #[serde(default)]
    pub production: u32,

    /// Gold yield.
    #[serde(default)]
    pub gold: u32,

    /// Science yield.
    #[serde(default)]
    pub science: u32,

    /// Culture yield.
    #[serde(default)]
    pub culture: u32,
}

impl BuildingData {
    /// Create a building with just a name and all other fields defaulted.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            cost: None,
            is_wonder: false,
            required_tech: None,
            maintenance: 0,
            food: 0,
            production: 0,
            gold: 0,
            science: 0,
            culture: 0,
        }
    }

    /// Set the technology that unlocks this building.
    #[must_use]
    pub fn with_required_tech(mut self, tech: impl Into<String>) -> Self {
        self.required_tech = Some(tech.into());
        self
    }

    /// Set an explicit production cost.
    #[must_use]
    pub const fn with_cost(mut self, cost: u32) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Mark this building as a world wonder.
    #[must_use]
    pub const fn wonder(mut self) -> Self {
        self.is_wonder = true;
        self
    }

    /// The cost if one has been set, treating `0` as unset.
    #[must_use]
    pub fn resolved_cost(&self) -> Option<u32> {
        self.cost.filter(|&cost| cost > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_cost_is_unset() {
        let building = BuildingData::named("Granary").with_cost(0);
        assert_eq!(building.resolved_cost(), None);

        let building = BuildingData::named("Granary").with_cost(40);
        assert_eq!(building.resolved_cost(), Some(40));
    }

    #[test]
    fn test_deserialize_minimal_ron() {
        let building: BuildingData = ron::from_str(
            r#"(name: "Monument", required_tech: Some("Pottery"), culture: 2)"#,
        )
        .unwrap();
        assert_eq!(building.name, "Monument");
        assert_eq!(building.cost, None);
        assert!(!building.is_wonder);
        assert_eq!(building.required_tech.as_deref(), Some("Pottery"));
        assert_eq!(building.culture, 2);
    }
}

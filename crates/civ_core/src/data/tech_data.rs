//! Tech tree data structures for data-driven technology definitions.

use serde::{Deserialize, Serialize};

/// A single technology as authored inside a tech column.
///
/// Cost and column are not authored here; the linker derives them from the
/// owning [`TechColumnData`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyData {
    /// Unique technology name.
    pub name: String,

    /// Civilopedia text.
    #[serde(default)]
    pub description: String,

    /// Technologies that must be researched first.
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Display row inside the column.
    #[serde(default)]
    pub row: u32,
}

impl TechnologyData {
    /// Create a technology with no prerequisites.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            prerequisites: Vec::new(),
            row: 0,
        }
    }

    /// Add prerequisites.
    #[must_use]
    pub fn requiring<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites
            .extend(prerequisites.into_iter().map(Into::into));
        self
    }
}

/// A column of the tech tree: technologies sharing one cost tier.
///
/// # Example RON
///
/// ```ron
/// TechColumnData(
///     column_number: 0,
///     era: "Ancient",
///     tech_cost: 10,
///     building_cost: 20,
///     wonder_cost: 50,
///     techs: [
///         TechnologyData(name: "Pottery", row: 1),
///         TechnologyData(name: "Mining", row: 2),
///     ],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechColumnData {
    /// Column index in the tech tree display.
    #[serde(default)]
    pub column_number: u32,

    /// Era label for the column.
    #[serde(default)]
    pub era: String,

    /// Research cost of every technology in this column.
    pub tech_cost: u32,

    /// Default cost of regular buildings unlocked by this column.
    pub building_cost: u32,

    /// Default cost of wonders unlocked by this column.
    pub wonder_cost: u32,

    /// Technologies in display order.
    #[serde(default)]
    pub techs: Vec<TechnologyData>,
}

impl TechColumnData {
    /// Create an empty column with the given costs.
    #[must_use]
    pub fn new(tech_cost: u32, building_cost: u32, wonder_cost: u32) -> Self {
        Self {
            column_number: 0,
            era: String::new(),
            tech_cost,
            building_cost,
            wonder_cost,
            techs: Vec::new(),
        }
    }

    /// Append a technology to the column.
    #[must_use]
    pub fn with_tech(mut self, tech: TechnologyData) -> Self {
        self.techs.push(tech);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let column = TechColumnData::new(10, 20, 50)
            .with_tech(TechnologyData::named("Pottery"))
            .with_tech(TechnologyData::named("Mining"));

        let names: Vec<_> = column.techs.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Pottery", "Mining"]);
    }

    #[test]
    fn test_deserialize_column() {
        let column: TechColumnData = ron::from_str(
            r#"(
                tech_cost: 10,
                building_cost: 20,
                wonder_cost: 50,
                techs: [(name: "Pottery"), (name: "Writing", prerequisites: ["Pottery"])],
            )"#,
        )
        .unwrap();
        assert_eq!(column.techs.len(), 2);
        assert_eq!(column.techs[1].prerequisites, ["Pottery"]);
    }
}

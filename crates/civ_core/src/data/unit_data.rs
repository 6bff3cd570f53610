//! Unit data structures for data-driven unit definitions.

use serde::{Deserialize, Serialize};

/// Broad unit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UnitType {
    /// Settlers, workers and other non-combatants.
    Civilian,
    /// Close-combat land unit.
    #[default]
    Melee,
    /// Ranged land unit.
    Ranged,
    /// Fast land unit.
    Mounted,
}

/// Data-driven unit definition.
///
/// # Example RON
///
/// ```ron
/// UnitData(
///     name: "Warrior",
///     unit_type: Melee,
///     movement: 2,
///     strength: 8,
///     cost: 40,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitData {
    /// Unique unit name.
    pub name: String,

    /// Civilopedia text.
    #[serde(default)]
    pub description: String,

    /// Unit category.
    #[serde(default)]
    pub unit_type: UnitType,

    /// Movement points per turn.
    #[serde(default = "default_movement")]
    pub movement: u32,

    /// Melee combat strength.
    #[serde(default)]
    pub strength: u32,

    /// Ranged combat strength (0 for non-ranged units).
    #[serde(default)]
    pub ranged_strength: u32,

    /// Production cost.
    #[serde(default)]
    pub cost: u32,

    /// Technology required to train this unit.
    #[serde(default)]
    pub required_tech: Option<String>,
}

const fn default_movement() -> u32 {
    2
}

impl UnitData {
    /// Whether this unit can fight.
    #[must_use]
    pub fn is_military(&self) -> bool {
        self.unit_type != UnitType::Civilian
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_military() {
        let mut unit: UnitData = ron::from_str(r#"(name: "Warrior", strength: 8)"#).unwrap();
        assert!(unit.is_military());
        assert_eq!(unit.movement, 2);

        unit.unit_type = UnitType::Civilian;
        assert!(!unit.is_military());
    }
}

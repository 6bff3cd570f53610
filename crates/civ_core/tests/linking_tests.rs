//! Ruleset linking tests against the shared sample ruleset.

use civ_core::error::GameError;
use civ_core::ruleset::{link_ruleset, TUTORIAL_LINE_BREAK};
use civ_test_utils::fixtures::{sample_raw_ruleset, sample_ruleset};

#[test]
fn test_every_technology_has_column_cost() {
    let ruleset = sample_ruleset();

    assert_eq!(ruleset.technologies.len(), 4);
    for tech in ruleset.technologies.iter() {
        let column = ruleset.column_of(tech).expect("technology has a column");
        assert_eq!(tech.cost, column.tech_cost);
        assert!(column.techs.contains(&tech.name));
    }

    let pottery = ruleset.technology("Pottery").unwrap();
    assert_eq!(pottery.cost, 10);
    assert_eq!(pottery.column.0, 1);
}

#[test]
fn test_building_costs_resolved() {
    let ruleset = sample_ruleset();

    // Unset cost, regular building: column building cost.
    assert_eq!(ruleset.building("Granary").unwrap().cost, Some(20));
    // Unset cost, wonder: column wonder cost.
    assert_eq!(ruleset.building("Hanging Gardens").unwrap().cost, Some(50));
    // Authored costs are kept.
    assert_eq!(ruleset.building("Barracks").unwrap().cost, Some(40));
    assert_eq!(ruleset.building("Palace").unwrap().cost, Some(100));
}

#[test]
fn test_tradition_branch() {
    let ruleset = sample_ruleset();
    let tradition = ruleset.policy_branches.get("Tradition").unwrap();

    assert_eq!(tradition.branch, "Tradition");
    assert!(tradition.requires.is_empty());

    let names: Vec<_> = tradition.policies.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Aristocracy", "Legalism", "Tradition Complete"]);

    assert_eq!(tradition.policies[0].requires, ["Tradition"]);
    assert_eq!(tradition.policies[1].requires, ["Aristocracy"]);
    assert_eq!(tradition.policies[2].requires, ["Tradition"]);
    assert!(tradition.policies.iter().all(|p| p.branch == "Tradition"));

    assert_eq!(
        ruleset.policy("Liberty Complete").unwrap().branch,
        "Liberty"
    );
    assert!(ruleset.policy("Tradition Finisher").is_none());
}

#[test]
fn test_tutorial_paragraphs_joined() {
    let ruleset = sample_ruleset();
    let intro = &ruleset.tutorials["Introduction"];

    assert_eq!(intro.len(), 2);
    assert_eq!(
        intro[0],
        format!("Welcome to the world.{TUTORIAL_LINE_BREAK}Your people await.")
    );
    assert_eq!(intro[1], "Found a city to begin.");
}

#[test]
fn test_dangling_building_technology_is_fatal() {
    let mut raw = sample_raw_ruleset();
    raw.buildings[1].required_tech = Some("Potery".to_string());

    let err = link_ruleset(raw).unwrap_err();
    assert!(matches!(
        err,
        GameError::DanglingReference { ref entity, field: "technology", ref target }
            if entity == "Granary" && target == "Potery"
    ));
}

#[test]
fn test_dangling_unit_technology_is_fatal() {
    let mut raw = sample_raw_ruleset();
    raw.units[1].required_tech = Some("Iron Working".to_string());
    assert!(matches!(
        link_ruleset(raw),
        Err(GameError::DanglingReference { .. })
    ));
}

#[test]
fn test_duplicate_names_keep_last_definition_in_place() {
    let mut raw = sample_raw_ruleset();
    let mut cheap_palace = raw.buildings[0].clone();
    cheap_palace.cost = Some(1);
    raw.buildings.push(cheap_palace);

    let ruleset = link_ruleset(raw).unwrap();
    assert_eq!(ruleset.buildings.len(), 4);
    assert_eq!(ruleset.building("Palace").unwrap().cost, Some(1));
    assert_eq!(ruleset.buildings.names().next(), Some("Palace"));
}

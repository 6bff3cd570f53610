//! Headless runs against the bundled ruleset.

use std::path::PathBuf;

use civ_core::bootstrap::{SessionOrigin, AUTOSAVE_NAME};
use civ_core::civilization::CivKind;
use civ_core::error::GameError;
use civ_core::hex::HexCoord;
use civ_headless::{load_ruleset, run_session, HeadlessConfig, SessionAction, SessionSummary};

fn bundled_ruleset_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/ruleset")
}

fn create_test_config(save_dir: &std::path::Path) -> HeadlessConfig {
    HeadlessConfig::new(bundled_ruleset_dir(), save_dir).with_seed(42)
}

#[test]
fn test_bundled_ruleset_links() {
    let ruleset = load_ruleset(bundled_ruleset_dir()).unwrap();

    assert_eq!(ruleset.building("Granary").unwrap().cost, Some(60));
    assert_eq!(ruleset.building("Hanging Gardens").unwrap().cost, Some(185));
    assert_eq!(ruleset.building("Temple").unwrap().cost, Some(120));

    let tradition = ruleset.policy_branches.get("Tradition").unwrap();
    assert_eq!(
        tradition.completion_policy().unwrap().name,
        "Tradition Complete"
    );
    assert!(ruleset.tutorials["Introduction"][0].contains("\r\n"));
}

#[test]
fn test_first_run_creates_then_second_run_resumes() {
    let saves = tempfile::tempdir().unwrap();
    let config = create_test_config(saves.path());

    let first = run_session(&config).unwrap();
    assert_eq!(first.origin, SessionOrigin::NewGame);
    assert!(saves.path().join(format!("{AUTOSAVE_NAME}.sav")).is_file());

    let second = run_session(&config).unwrap();
    assert_eq!(second.origin, SessionOrigin::Resumed);
    assert_eq!(second.civilizations, first.civilizations);
    assert_eq!(second.units, first.units);
}

#[test]
fn test_classic_summary() {
    let saves = tempfile::tempdir().unwrap();
    let summary: SessionSummary = run_session(&create_test_config(saves.path())).unwrap();

    assert_eq!(summary.tile_count, 1261);
    assert_eq!(summary.map_radius, 20);
    assert_eq!(summary.turns, 0);

    let names: Vec<_> = summary.civilizations.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Babylon", "Barbarians", "Greece", "China", "Egypt"]);

    let player = &summary.civilizations[0];
    assert_eq!(player.kind, CivKind::Player);
    assert_eq!(player.start_position, Some(HexCoord::ORIGIN));
    assert_eq!(player.capital.as_deref(), Some("Babylon"));
    assert_eq!(player.owned_tiles, 7);
    assert!(summary.civilizations.iter().all(|c| c.gold == 0));

    assert_eq!(summary.units.len(), 5);
    assert!(summary.units.iter().all(|u| u.owner == "Barbarians"));

    let json = summary.to_json().unwrap();
    assert!(json.contains("\"origin\": \"NewGame\""));
}

#[test]
fn test_corrupt_autosave_is_replaced() {
    let saves = tempfile::tempdir().unwrap();
    std::fs::write(saves.path().join(format!("{AUTOSAVE_NAME}.sav")), b"garbage").unwrap();

    let summary = run_session(&create_test_config(saves.path())).unwrap();
    assert_eq!(summary.origin, SessionOrigin::NewGame);

    let resumed = run_session(&create_test_config(saves.path())).unwrap();
    assert_eq!(resumed.origin, SessionOrigin::Resumed);
}

#[test]
fn test_new_game_action() {
    let saves = tempfile::tempdir().unwrap();
    run_session(&create_test_config(saves.path())).unwrap();

    let config = create_test_config(saves.path())
        .with_action(SessionAction::NewGame { keep_tutorials: false });
    let summary = run_session(&config).unwrap();
    assert_eq!(summary.origin, SessionOrigin::NewGame);
    assert!(summary.tutorials_shown.is_empty());
}

#[test]
fn test_world_config_file() {
    let saves = tempfile::tempdir().unwrap();
    let world = saves.path().join("world.ron");
    std::fs::write(
        &world,
        r#"(map_radius: 10, exclusion_radius: 3, rival_civilizations: ["Rome"], barbarian_units: 2)"#,
    )
    .unwrap();

    let config = create_test_config(saves.path()).with_world_config(&world);
    let summary = run_session(&config).unwrap();

    assert_eq!(summary.tile_count, 331);
    assert_eq!(summary.civilizations.len(), 3);
    assert_eq!(summary.units.len(), 2);
}

#[test]
fn test_missing_ruleset_is_fatal() {
    let saves = tempfile::tempdir().unwrap();
    let config = HeadlessConfig::new(saves.path().join("nowhere"), saves.path());
    assert!(matches!(
        run_session(&config),
        Err(GameError::DataLoad { .. })
    ));
}

//! Engine-adapter contracts: config resolution, snapshot ingestion,
//! placement legality, and submission framing.

use anyhow::Result;
use rampart_autopilot::engine::{
    c, EngineError, FramePhase, TurnState, UnitClass, UnitRoster,
};
use serde_json::json;
use std::fs;

const CONFIG: &str = r#"{
    "unitInformation": [
        {"shorthand": "FF", "cost": 1.0},
        {"shorthand": "EF", "cost": 4.0},
        {"shorthand": "DF", "cost": 3.0, "damage": 3.0, "range": 3.5},
        {"shorthand": "PI", "cost": 1.0, "damage": 1.0, "range": 3.5},
        {"shorthand": "EI", "cost": 3.0, "damage": 3.0, "range": 5.5},
        {"shorthand": "SI", "cost": 1.0, "damage": 10.0, "range": 4.5}
    ],
    "resources": {"startingHP": 40.0}
}"#;

fn roster() -> Result<UnitRoster> {
    Ok(UnitRoster::from_config_str(CONFIG)?)
}

fn frame(us: (f64, f64, f64), p1_units: serde_json::Value) -> String {
    json!({
        "turnInfo": [0, 7, 0],
        "p1Stats": [us.0, us.1, us.2, 0.0],
        "p2Stats": [30.0, 10.0, 5.0, 0.0],
        "p1Units": p1_units,
        "p2Units": [[], [], [[16, 20, 60.0, "0"], [13, 20, 60.0, "1"]], [], [], [], []],
        "events": {}
    })
    .to_string()
}

#[test]
fn roster_resolves_from_a_config_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("game-config.json");
    fs::write(&path, CONFIG)?;

    let roster = UnitRoster::from_config_file(&path)?;
    assert_eq!(roster.shorthand(UnitClass::Destructor), "DF");
    assert_eq!(roster.cost(UnitClass::Encryptor), 4.0);
    assert_eq!(roster.attrs(UnitClass::Destructor).range, 3.5);
    assert_eq!(roster.starting_health(), 40.0);
    assert_eq!(roster.class_for("SI"), Some(UnitClass::Scrambler));
    assert_eq!(roster.class_for("??"), None);
    assert_eq!(roster.cheapest_stationary(), UnitClass::Filter);
    Ok(())
}

#[test]
fn roster_rejects_a_truncated_archetype_list() {
    let raw = r#"{"unitInformation": [{"shorthand": "FF", "cost": 1.0}]}"#;
    assert!(matches!(
        UnitRoster::from_config_str(raw),
        Err(EngineError::MalformedConfig(_))
    ));
}

#[test]
fn snapshot_parses_phase_stats_and_units() -> Result<()> {
    let roster = roster()?;
    let raw = frame(
        (25.0, 12.0, 8.0),
        json!([[[13, 5, 60.0, "2"]], [], [], [], [], [], []]),
    );
    let state = TurnState::parse(&roster, &raw)?;

    assert_eq!(state.phase(), FramePhase::Deploy);
    assert_eq!(state.turn_number(), 7);
    assert_eq!(state.my_health(), 25.0);
    assert_eq!(state.my_cores(), 12.0);
    assert_eq!(state.my_bits(), 8.0);
    assert_eq!(state.opening_bits(), 8.0);
    assert_eq!(state.enemy_health(), 30.0);

    assert!(state.contains_stationary_unit(c(13, 5)));
    assert!(state.contains_stationary_unit(c(16, 20)));
    assert!(!state.contains_stationary_unit(c(14, 5)));
    Ok(())
}

#[test]
fn snapshot_rejects_garbage_and_missing_stats() -> Result<()> {
    let roster = roster()?;
    assert!(matches!(
        TurnState::parse(&roster, "{"),
        Err(EngineError::MalformedSnapshot(_))
    ));

    let raw = json!({
        "turnInfo": [0, 1, 0],
        "p1Stats": [30.0],
        "p2Stats": [30.0, 10.0, 5.0, 0.0],
        "p1Units": [],
        "p2Units": [],
        "events": {}
    })
    .to_string();
    assert!(matches!(
        TurnState::parse(&roster, &raw),
        Err(EngineError::MalformedSnapshot(_))
    ));
    Ok(())
}

#[test]
fn attackers_counts_only_enemy_towers_in_range() -> Result<()> {
    let roster = roster()?;
    // Our own tower next to the probe cell must not count.
    let raw = frame(
        (30.0, 10.0, 5.0),
        json!([[], [], [[13, 18, 60.0, "3"]], [], [], [], []]),
    );
    let state = TurnState::parse(&roster, &raw)?;

    // Enemy towers sit at (13,20) and (16,20); range is 3.5.
    assert_eq!(state.attackers_of(c(13, 18)), 1);
    assert_eq!(state.attackers_of(c(13, 27)), 0);
    assert_eq!(state.attackers_of(c(15, 21)), 2);
    Ok(())
}

#[test]
fn spawn_legality_mirrors_the_engine_contract() -> Result<()> {
    let roster = roster()?;
    let raw = frame(
        (30.0, 7.0, 2.0),
        json!([[[12, 1, 60.0, "4"]], [], [], [], [], [], []]),
    );
    let mut state = TurnState::parse(&roster, &raw)?;

    // Occupied cell: absorbed.
    assert_eq!(state.attempt_spawn(UnitClass::Destructor, c(12, 1), 1), 0);
    // Off-board and enemy-half cells: absorbed.
    assert_eq!(state.attempt_spawn(UnitClass::Destructor, c(1, 1), 1), 0);
    assert_eq!(state.attempt_spawn(UnitClass::Destructor, c(13, 20), 1), 0);
    // Mobile units only deploy from the friendly edges.
    assert_eq!(state.attempt_spawn(UnitClass::Ping, c(13, 5), 1), 0);

    // Cores cover two towers of the requested three.
    assert_eq!(state.attempt_spawn(UnitClass::Destructor, c(13, 5), 1), 1);
    assert_eq!(state.attempt_spawn(UnitClass::Destructor, c(14, 5), 2), 1);
    // The cell just claimed now blocks a repeat request.
    assert_eq!(state.attempt_spawn(UnitClass::Destructor, c(13, 5), 1), 0);

    // Bits cover two pings; the third is absorbed.
    assert_eq!(state.attempt_spawn(UnitClass::Ping, c(14, 0), 3), 2);

    assert_eq!(state.my_cores(), 1.0);
    assert_eq!(state.my_bits(), 0.0);
    Ok(())
}

#[test]
fn submission_frames_list_builds_then_deploys() -> Result<()> {
    let roster = roster()?;
    let raw = frame((30.0, 10.0, 5.0), json!([[], [], [], [], [], [], []]));
    let mut state = TurnState::parse(&roster, &raw)?;

    state.attempt_spawn(UnitClass::Encryptor, c(13, 5), 1);
    state.attempt_spawn(UnitClass::Destructor, c(14, 5), 1);
    state.attempt_spawn(UnitClass::Scrambler, c(13, 0), 2);

    let (builds, deploys) = state.submission_lines();
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&builds)?,
        json!([["EF", 13, 5], ["DF", 14, 5]])
    );
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&deploys)?,
        json!([["SI", 13, 0], ["SI", 13, 0]])
    );
    Ok(())
}

#[test]
fn router_falls_back_to_the_deepest_reachable_cell() -> Result<()> {
    let roster = roster()?;
    // Wall (13,0) into a pocket with (14,0): the route to the far edge
    // is severed, so the path ends at the deepest cell it can reach.
    let raw = frame(
        (30.0, 10.0, 5.0),
        json!([[[13, 1, 60.0, "5"], [14, 1, 60.0, "6"]], [], [], [], [], [], []]),
    );
    let state = TurnState::parse(&roster, &raw)?;

    let path = state.path_to_edge(c(13, 0));
    assert_eq!(path, vec![c(13, 0)]);

    // A blocked start routes nowhere.
    assert!(state.path_to_edge(c(13, 1)).is_empty());

    // An open board reaches the opposite edge.
    let raw = frame((30.0, 10.0, 5.0), json!([[], [], [], [], [], [], []]));
    let open = TurnState::parse(&roster, &raw)?;
    let path = open.path_to_edge(c(13, 0));
    let end = *path.last().expect("nonempty path");
    assert_eq!(path[0], c(13, 0));
    // Spawning on the bottom-left edge routes to the top-right edge.
    assert_eq!(end.x + end.y, 41, "not a top-right edge cell: {end:?}");
    Ok(())
}

#[test]
fn enemy_census_filters_by_class_and_coordinates() -> Result<()> {
    let roster = roster()?;
    let raw = frame((30.0, 10.0, 5.0), json!([[], [], [], [], [], [], []]));
    let state = TurnState::parse(&roster, &raw)?;

    assert_eq!(state.count_enemy_units(None, None, None), 2);
    assert_eq!(
        state.count_enemy_units(Some(UnitClass::Destructor), None, None),
        2
    );
    assert_eq!(state.count_enemy_units(Some(UnitClass::Filter), None, None), 0);
    assert_eq!(state.count_enemy_units(None, Some(&[16]), None), 1);
    assert_eq!(state.count_enemy_units(None, None, Some(&[20])), 2);
    Ok(())
}

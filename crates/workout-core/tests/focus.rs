use workout_core::error::CoreError;
use workout_core::focus::{exercises_for_focus, selected_focus};
use workout_core::models::{FocusArea, FocusAreas, TrackerConfig};

fn area(id: &str, exercises: &[&str]) -> FocusArea {
    FocusArea {
        id: id.to_string(),
        name: id.to_string(),
        exercises: exercises.iter().map(|e| e.to_string()).collect(),
    }
}

fn config() -> TrackerConfig {
    TrackerConfig {
        focus_areas: FocusAreas {
            weights: vec![
                area("chest", &["Push-up", "Bench Press"]),
                area("arms", &["Bicep Curl", "Push-up", "Tricep Dip"]),
            ],
            other: vec![area("cardio", &["Running"])],
        },
    }
}

#[test]
fn single_area_is_sorted() {
    assert_eq!(
        exercises_for_focus(&config(), &["chest"]),
        ["Bench Press", "Push-up"]
    );
}

#[test]
fn other_areas_are_searched() {
    assert_eq!(exercises_for_focus(&config(), &["cardio"]), ["Running"]);
}

#[test]
fn duplicates_are_ignored() {
    let cfg = config();
    assert_eq!(
        exercises_for_focus(&cfg, &["chest", "chest"]),
        exercises_for_focus(&cfg, &["chest"])
    );
}

#[test]
fn union_is_order_independent_and_deduplicated() {
    let cfg = config();
    let forward = exercises_for_focus(&cfg, &["chest", "arms"]);
    let backward = exercises_for_focus(&cfg, &["arms", "chest"]);

    assert_eq!(forward, backward);
    assert_eq!(forward, ["Bench Press", "Bicep Curl", "Push-up", "Tricep Dip"]);
}

#[test]
fn empty_and_unknown_yield_nothing() {
    let cfg = config();
    let none: [&str; 0] = [];
    assert!(exercises_for_focus(&cfg, &none).is_empty());
    assert!(exercises_for_focus(&cfg, &["yoga"]).is_empty());
    assert_eq!(exercises_for_focus(&cfg, &["yoga", "cardio"]), ["Running"]);
}

#[test]
fn none_choice_clears_selection() {
    assert!(selected_focus(None).is_empty());
    assert!(selected_focus(Some("none")).is_empty());
    assert_eq!(selected_focus(Some("chest")), ["chest"]);
}

#[test]
fn config_json_uses_camel_case() {
    let json = r#"{
        "focusAreas": {
            "weights": [{"id": "chest", "name": "Chest", "exercises": ["Bench Press", "Push-up"]}],
            "other": [{"id": "cardio", "name": "Cardio", "exercises": ["Running"]}]
        }
    }"#;
    let cfg: TrackerConfig = serde_json::from_str(json).unwrap();

    assert_eq!(cfg.focus_areas.weights[0].name, "Chest");
    assert_eq!(cfg.find("cardio").unwrap().exercises, ["Running"]);
    assert!(cfg.validate().is_ok());
}

#[test]
fn duplicate_ids_across_lists_are_invalid() {
    let mut cfg = config();
    cfg.focus_areas.other.push(area("chest", &["Cable Fly"]));

    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, CoreError::DuplicateFocusArea(id) if id == "chest"));
}

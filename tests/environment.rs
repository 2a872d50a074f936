//! Environment descriptions loaded from disk

use std::io::Write;

use qpath::environment::EnvironmentSpec;
use qpath::{Error, QLearningEstimator};
use tempfile::tempdir;

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn loads_and_trains_a_file_described_environment() {
    let tmp = tempdir().unwrap();
    let path = write_file(
        &tmp,
        "corridor.json",
        r#"{
            "state_count": 4,
            "goal": 3,
            "labels": ["start", "mid1", "mid2", "end"],
            "actions": [[1], [0, 2], [1, 3], [3]],
            "rewards": [{"from": 2, "to": 3, "value": 50.0}]
        }"#,
    );

    let env = EnvironmentSpec::load(&path).unwrap().build().unwrap();
    assert_eq!(env.label(0), "start");
    assert!(env.unreachable_states().is_empty());

    let mut estimator = QLearningEstimator::new(env, 0.2, 0.9).unwrap().with_seed(5);
    estimator.train(500);
    assert_eq!(estimator.greedy_policy(2), 3);
    assert_eq!(estimator.greedy_policy(1), 2);
}

#[test]
fn load_surfaces_missing_file_as_io_error() {
    let tmp = tempdir().unwrap();
    let err = EnvironmentSpec::load(tmp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn load_surfaces_malformed_json_as_serialization_error() {
    let tmp = tempdir().unwrap();
    let path = write_file(&tmp, "broken.json", "{ not json");
    let err = EnvironmentSpec::load(&path).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn building_a_loaded_spec_still_validates() {
    let tmp = tempdir().unwrap();
    let path = write_file(
        &tmp,
        "bad_goal.json",
        r#"{
            "state_count": 2,
            "goal": 9,
            "actions": [[1], [1]]
        }"#,
    );
    let err = EnvironmentSpec::load(&path).unwrap().build().unwrap_err();
    assert!(matches!(err, Error::GoalOutOfRange { goal: 9, .. }));
}

#[test]
fn reachability_warning_case_survives_a_round_trip() {
    let tmp = tempdir().unwrap();
    let path = write_file(
        &tmp,
        "island.json",
        r#"{
            "state_count": 3,
            "goal": 1,
            "actions": [[1], [1], [2]]
        }"#,
    );
    let env = EnvironmentSpec::load(&path).unwrap().build().unwrap();
    assert_eq!(env.unreachable_states(), vec![2]);
}

use assert_cmd::Command;
use insta::assert_snapshot;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BIN: &str = "garmin-to-hevy";
const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/activities.json");
const SAMPLE_OVERRIDES: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/custom_exercise_names.sample.json"
);

/// Binary running inside `dir` with no converter env leaking in from the host.
fn converter(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN).expect("binary should build");
    cmd.current_dir(dir)
        .env_remove("GARMIN_TO_HEVY_OUTPUT_BASENAME")
        .env_remove("GARMIN_TO_HEVY_MAPPING_FILE")
        .env_remove("GARMIN_TO_HEVY_UNKNOWN_EXERCISES")
        .env_remove("GARMIN_TO_HEVY_ACTIVITY_URL_BASE")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_no_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();
    converter(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_too_many_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();
    converter(dir.path())
        .args([FIXTURE, "out", "extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_help_lists_options() {
    let dir = TempDir::new().unwrap();
    converter(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--unknown-exercises"))
        .stdout(predicate::str::contains("--mapping"))
        .stdout(predicate::str::contains("OUTPUT_BASENAME"))
        .stdout(predicate::str::contains("GARMIN_TO_HEVY_MAPPING_FILE"));
}

#[test]
fn test_default_basename_and_report() {
    let dir = TempDir::new().unwrap();
    converter(dir.path())
        .arg(FIXTURE)
        .assert()
        .success()
        .stdout(predicate::str::contains("CABLE_WOODCHOP"))
        .stdout(predicate::str::contains(
            "https://connect.garmin.com/modern/activity/1001",
        ))
        .stdout(predicate::str::contains(
            "Wrote 5 sets to Converted_Garmin_Workouts.csv (2 of 3 activities were strength training, 3 sets filtered)",
        ));

    let csv = fs::read_to_string(dir.path().join("Converted_Garmin_Workouts.csv")).unwrap();
    assert_eq!(csv.lines().count(), 6);
}

#[test]
fn test_custom_basename_with_overrides_and_skip() {
    let dir = TempDir::new().unwrap();
    converter(dir.path())
        .args([FIXTURE, "march"])
        .args(["--mapping", SAMPLE_OVERRIDES])
        .args(["--unknown-exercises", "skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 unknown sets skipped"));

    let csv = fs::read_to_string(dir.path().join("march.csv")).unwrap();
    assert_snapshot!(csv, @r###"
    Date,Workout Name,Exercise Name,Set Order,Weight,Weight Unit,Reps,RPE,Distance,Distance Unit,Seconds,Notes,Workout Notes,Workout Duration
    2023-05-01 08:30:00,Leg Day-2023-05-01,Squat (Barbell),1,100,kg,5,,,km,0,,"""heavy, slow""",62m
    2023-05-01 08:30:00,Leg Day-2023-05-01,Squat (Barbell),2,102,kg,5,,,km,0,,"""heavy, slow""",62m
    2023-05-01 08:30:00,Leg Day-2023-05-01,CABLE_WOODCHOP,1,20,kg,12,,,km,0,,"""heavy, slow""",62m
    2023-05-03 18:00:00,Pull-2023-05-03,Pull Up,1,0,kg,8,,,km,0,,"""""",45s
    "###);
}

#[test]
fn test_config_file_in_working_directory_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("garmin-to-hevy.toml"),
        "[output]\ndefault_basename = \"from_config\"\n\n[logging]\nconsole_output = \"none\"\n",
    )
    .unwrap();

    converter(dir.path()).arg(FIXTURE).assert().success();
    assert!(dir.path().join("from_config.csv").exists());
}

#[test]
fn test_cli_basename_beats_environment() {
    let dir = TempDir::new().unwrap();
    converter(dir.path())
        .env("GARMIN_TO_HEVY_OUTPUT_BASENAME", "from_env")
        .args([FIXTURE, "from_cli"])
        .assert()
        .success();

    assert!(dir.path().join("from_cli.csv").exists());
    assert!(!dir.path().join("from_env.csv").exists());
}

#[test]
fn test_broken_mapping_file_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let mapping = dir.path().join("names.json");
    fs::write(&mapping, "{ not json").unwrap();

    converter(dir.path())
        .arg(FIXTURE)
        .arg("--mapping")
        .arg(&mapping)
        .assert()
        .success()
        .stderr(predicate::str::contains("[WARNING]"));
    assert!(dir.path().join("Converted_Garmin_Workouts.csv").exists());
}

#[test]
fn test_missing_mapping_file_from_environment_warns() {
    let dir = TempDir::new().unwrap();
    converter(dir.path())
        .env("GARMIN_TO_HEVY_MAPPING_FILE", "my_names.json")
        .arg(FIXTURE)
        .assert()
        .success()
        .stderr(predicate::str::contains("[WARNING]"))
        .stderr(predicate::str::contains("my_names.json"));
    assert!(dir.path().join("Converted_Garmin_Workouts.csv").exists());
}

#[test]
fn test_missing_default_mapping_file_is_silent() {
    let dir = TempDir::new().unwrap();
    converter(dir.path())
        .arg(FIXTURE)
        .assert()
        .success()
        .stderr(predicate::str::contains("[WARNING]").not());
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    converter(dir.path())
        .arg("does_not_exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[ERROR] IO_ERROR"));

    assert!(!dir.path().join("Converted_Garmin_Workouts.csv").exists());
}

#[test]
fn test_malformed_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.json");
    fs::write(&input, "[{\"activityId\": 1,").unwrap();

    converter(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("[ERROR] JSON_ERROR"));

    assert!(!dir.path().join("Converted_Garmin_Workouts.csv").exists());
}

#[test]
fn test_missing_explicit_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    converter(dir.path())
        .arg(FIXTURE)
        .args(["--config", "nowhere.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_NOT_FOUND"));
}

use std::fs;
use std::path::PathBuf;

use drop_intercept::core::Scenario;
use drop_intercept::core::config::{ConfigError, load_overrides, validated_or_default};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("drop_intercept_{}_{name}", std::process::id()));
    fs::write(&path, contents).expect("temp file should be writable");
    path
}

#[test]
fn json_file_overlays_defaults() {
    let path = scratch_file(
        "overlay.json",
        r#"{ "carrier_speed": 320.0, "target_y": -900.0, "dt": 0.05 }"#,
    );
    let scenario = load_overrides(&path)
        .expect("file should load")
        .apply(Scenario::default());
    fs::remove_file(&path).ok();

    assert_eq!(scenario.carrier_speed, 320.0);
    assert_eq!(scenario.target.center.y, -900.0);
    assert_eq!(scenario.dt, 0.05);
    assert_eq!(scenario.agent_speed, 110.0);
    assert_eq!(scenario.angle_samples, 200);
}

#[test]
fn malformed_json_is_reported() {
    let path = scratch_file("broken.json", "{ carrier_speed: ");
    let err = load_overrides(&path).expect_err("broken json should fail");
    fs::remove_file(&path).ok();

    assert!(matches!(err, ConfigError::Json { .. }));
    assert!(err.to_string().contains("could not parse"));
}

#[test]
fn missing_file_is_reported() {
    let err = load_overrides(std::path::Path::new("/nonexistent/drop.json"))
        .expect_err("missing file should fail");
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn invalid_values_from_file_fall_back_to_defaults() {
    let path = scratch_file("invalid.json", r#"{ "angle_samples": 0 }"#);
    let scenario = validated_or_default(
        load_overrides(&path)
            .expect("file should load")
            .apply(Scenario::default()),
    );
    fs::remove_file(&path).ok();

    assert_eq!(scenario, Scenario::default());
}

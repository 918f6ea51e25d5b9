use std::fs;
use tempfile::tempdir;
use wav_dataset_prep::config::config_path;
use wav_dataset_prep::{load_config, PrepConfig, PrepError, RoleRange, SplitBounds};

#[test]
fn missing_split_bounds_selects_default_fractions() {
    let cfg = PrepConfig::from_json_str(r#"{ "file_name": "ht1", "epochs": 200 }"#).unwrap();
    assert_eq!(cfg.file_name, "ht1");
    assert_eq!(cfg.split_bounds, SplitBounds::default());
}

#[test]
fn missing_file_name_is_a_config_error() {
    let err = PrepConfig::from_json_str(r#"{ "hidden_size": 16 }"#).unwrap_err();
    assert!(matches!(err, PrepError::Config(_)));

    let err = PrepConfig::from_json_str(r#"{ "file_name": "" }"#).unwrap_err();
    assert!(matches!(err, PrepError::Config(_)));
}

#[test]
fn split_bounds_select_absolute_mode() {
    let cfg = PrepConfig::from_json_str(
        r#"{
  "file_name": "amp",
  "split_bounds": {
    "train": { "start": null, "end": null },
    "test": { "start": 0, "end": 4410 },
    "val": { "start": 4410 }
  }
}"#,
    )
    .unwrap();

    assert_eq!(
        cfg.split_bounds,
        SplitBounds::Absolute {
            train: RoleRange::new(None, None),
            test: RoleRange::new(Some(0), Some(4410)),
            val: RoleRange::new(Some(4410), None),
        }
    );
}

#[test]
fn partial_split_bounds_leave_other_roles_unset() {
    let cfg = PrepConfig::from_json_str(
        r#"{ "file_name": "amp", "split_bounds": { "train": { "start": null, "end": null } } }"#,
    )
    .unwrap();
    match cfg.split_bounds {
        SplitBounds::Absolute { train, test, val } => {
            assert_eq!(train, RoleRange::full());
            assert_eq!(test, RoleRange::full());
            assert_eq!(val, RoleRange::full());
        }
        other => panic!("expected absolute bounds, got {other:?}"),
    }
}

#[test]
fn empty_split_bounds_object_counts_as_absent() {
    let cfg = PrepConfig::from_json_str(r#"{ "file_name": "x", "split_bounds": {} }"#).unwrap();
    assert_eq!(cfg.split_bounds, SplitBounds::default());
}

#[test]
fn split_fractions_are_validated_at_load_time() {
    let cfg =
        PrepConfig::from_json_str(r#"{ "file_name": "x", "split_fractions": [0.8, 0.1, 0.1] }"#)
            .unwrap();
    assert_eq!(
        cfg.split_bounds,
        SplitBounds::Fractional {
            train: 0.8,
            test: 0.1,
            val: 0.1
        }
    );

    let err =
        PrepConfig::from_json_str(r#"{ "file_name": "x", "split_fractions": [0.8, 0.3, 0.1] }"#)
            .unwrap_err();
    assert!(matches!(err, PrepError::InvalidBounds(_)));
}

#[test]
fn both_split_representations_are_rejected() {
    let err = PrepConfig::from_json_str(
        r#"{ "file_name": "x", "split_fractions": [0.5, 0.25, 0.25],
             "split_bounds": { "train": { "start": 0, "end": 10 } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, PrepError::Config(_)));
}

#[test]
fn load_config_appends_json_extension() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("RNN-aidadsp-1.json"),
        r#"{ "file_name": "aidadsp-1" }"#,
    )
    .unwrap();

    assert_eq!(
        config_path("RNN-aidadsp-1", dir.path()),
        dir.path().join("RNN-aidadsp-1.json")
    );

    let a = load_config("RNN-aidadsp-1", dir.path()).unwrap();
    let b = load_config("RNN-aidadsp-1.json", dir.path()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.file_name, "aidadsp-1");
}

#[test]
fn load_config_reports_missing_and_malformed_files() {
    let dir = tempdir().unwrap();
    let err = load_config("nope", dir.path()).unwrap_err();
    assert!(matches!(err, PrepError::Io { .. }));

    fs::write(dir.path().join("broken.json"), "{ file_name: ").unwrap();
    let err = load_config("broken", dir.path()).unwrap_err();
    assert!(matches!(err, PrepError::Config(_)));
}

use std::fs;

use gesture_detect::commands::{format_labels, inspect_file, load_detector_config};
use gesture_detect::{default_log_filter, sha256_bytes};
use tempfile::tempdir;

#[test]
fn sha256_bytes_matches_known_hash() {
    let hash = sha256_bytes(b"abc");
    assert_eq!(hash, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
}

#[test]
fn format_labels_pairs_slugs_with_labels() {
    let entries = format_labels(&["turn-left".to_string(), "".to_string()]);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, "Turn Left");
    assert_eq!(entries[1].label, "");
}

#[test]
fn cli_flags_override_config_file() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("detector.yaml");
    fs::write(&path, "endpoint: http://from-file/predict\ntimeout_secs: 10\n").unwrap();
    let path_str = path.to_string_lossy().to_string();

    let from_file = load_detector_config(Some(&path_str), None, None).unwrap();
    assert_eq!(from_file.endpoint, "http://from-file/predict");
    assert_eq!(from_file.timeout_secs, Some(10));

    let overridden =
        load_detector_config(Some(&path_str), Some("http://flag/predict".into()), Some(3)).unwrap();
    assert_eq!(overridden.endpoint, "http://flag/predict");
    assert_eq!(overridden.timeout_secs, Some(3));
}

#[test]
fn missing_config_file_is_an_error() {
    let err = load_detector_config(Some("/definitely/not/here.json"), None, None).unwrap_err();
    assert!(err.to_string().contains("Failed to load detector config"));
}

#[test]
fn verbose_raises_log_filter() {
    assert!(default_log_filter(false).contains("warn"));
    assert!(default_log_filter(true).contains("info"));
}

#[test]
fn inspect_file_hashes_loaded_content() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("clip.mp4");
    fs::write(&path, b"abc").expect("write clip");

    let report = inspect_file(&path).expect("inspect");
    assert_eq!(report.sha256, sha256_bytes(b"abc"));
    assert_eq!(report.size, 3);
    assert!(report.accepted);

    let body = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(body["state"], "file_selected");
    assert_eq!(body["submit_caption"], "Detect Gestures");
    assert!(body.get("view").is_none());
}

mod common;

use chrono::NaiveDate;
use common::{Call, RecordingVcs};
use nfo_stats::publish::{artifacts_changed, publish_if_changed, PublishOutcome, PublishTarget};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn target(cache_dir: Option<PathBuf>) -> PublishTarget {
    PublishTarget {
        remote: "origin".to_string(),
        branch: "main".to_string(),
        cache_dir,
    }
}

fn write_artifacts(dir: &Path, dark: &str, light: &str) -> Vec<PathBuf> {
    let dark_path = dir.join("dark_mode.svg");
    let light_path = dir.join("light_mode.svg");
    std::fs::write(&dark_path, dark).unwrap();
    std::fs::write(&light_path, light).unwrap();
    vec![dark_path, light_path]
}

#[test]
fn test_unchanged_artifacts_make_no_calls() {
    let temp_dir = tempfile::tempdir().unwrap();
    let artifacts = write_artifacts(temp_dir.path(), "<svg>dark</svg>", "<svg>light</svg>");

    let vcs = RecordingVcs::new();
    vcs.seed(&artifacts[0], b"<svg>dark</svg>");
    vcs.seed(&artifacts[1], b"<svg>light</svg>");

    let outcome = publish_if_changed(&vcs, &artifacts, &target(None), date()).unwrap();

    assert_eq!(outcome, PublishOutcome::Unchanged);
    assert_eq!(vcs.calls(), vec![]);
}

#[test]
fn test_one_changed_artifact_publishes_both() {
    let temp_dir = tempfile::tempdir().unwrap();
    let artifacts = write_artifacts(temp_dir.path(), "<svg>dark v2</svg>", "<svg>light</svg>");

    let vcs = RecordingVcs::new();
    vcs.seed(&artifacts[0], b"<svg>dark</svg>");
    vcs.seed(&artifacts[1], b"<svg>light</svg>");

    let outcome = publish_if_changed(&vcs, &artifacts, &target(None), date()).unwrap();

    let message = "Update profile stats (2026-10-19)".to_string();
    assert_eq!(
        outcome,
        PublishOutcome::Published {
            message: message.clone()
        }
    );
    assert_eq!(
        vcs.calls(),
        vec![
            Call::Stage(artifacts.clone()),
            Call::Commit(message, artifacts.clone()),
            Call::Push("origin".to_string(), "main".to_string()),
        ]
    );
}

#[test]
fn test_uncommitted_artifact_counts_as_changed() {
    let temp_dir = tempfile::tempdir().unwrap();
    let artifacts = write_artifacts(temp_dir.path(), "<svg>dark</svg>", "<svg>light</svg>");

    let vcs = RecordingVcs::new();
    vcs.seed(&artifacts[0], b"<svg>dark</svg>");

    assert!(artifacts_changed(&vcs, &artifacts).unwrap());
}

#[test]
fn test_single_byte_difference_is_a_change() {
    let temp_dir = tempfile::tempdir().unwrap();
    let artifacts = write_artifacts(temp_dir.path(), "<svg>dark</svg>\n", "<svg>light</svg>");

    let vcs = RecordingVcs::new();
    vcs.seed(&artifacts[0], b"<svg>dark</svg>");
    vcs.seed(&artifacts[1], b"<svg>light</svg>");

    assert!(artifacts_changed(&vcs, &artifacts).unwrap());
}

#[test]
fn test_existing_cache_dir_is_staged_with_cards() {
    let temp_dir = tempfile::tempdir().unwrap();
    let artifacts = write_artifacts(temp_dir.path(), "<svg>dark</svg>", "<svg>light</svg>");
    let cache_dir = temp_dir.path().join("cache");
    std::fs::create_dir(&cache_dir).unwrap();
    std::fs::write(cache_dir.join("stats.json"), "{}").unwrap();

    let vcs = RecordingVcs::new();
    publish_if_changed(&vcs, &artifacts, &target(Some(cache_dir.clone())), date()).unwrap();

    let mut expected = artifacts.clone();
    expected.push(cache_dir);
    assert_eq!(vcs.calls()[0], Call::Stage(expected.clone()));
    assert_eq!(
        vcs.calls()[1],
        Call::Commit("Update profile stats (2026-10-19)".to_string(), expected)
    );
}

#[test]
fn test_empty_cache_dir_is_not_staged() {
    let temp_dir = tempfile::tempdir().unwrap();
    let artifacts = write_artifacts(temp_dir.path(), "<svg>dark</svg>", "<svg>light</svg>");
    let cache_dir = temp_dir.path().join("cache");
    std::fs::create_dir(&cache_dir).unwrap();

    let vcs = RecordingVcs::new();
    publish_if_changed(&vcs, &artifacts, &target(Some(cache_dir)), date()).unwrap();

    assert_eq!(vcs.calls()[0], Call::Stage(artifacts));
}

#[test]
fn test_missing_cache_dir_is_not_staged() {
    let temp_dir = tempfile::tempdir().unwrap();
    let artifacts = write_artifacts(temp_dir.path(), "<svg>dark</svg>", "<svg>light</svg>");

    let vcs = RecordingVcs::new();
    let missing = temp_dir.path().join("cache");
    publish_if_changed(&vcs, &artifacts, &target(Some(missing)), date()).unwrap();

    assert_eq!(vcs.calls()[0], Call::Stage(artifacts));
}

#[test]
fn test_push_failure_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    let artifacts = write_artifacts(temp_dir.path(), "<svg>dark</svg>", "<svg>light</svg>");

    let vcs = RecordingVcs::failing_push();
    let result = publish_if_changed(&vcs, &artifacts, &target(None), date());

    assert!(result.is_err());
    assert_eq!(vcs.commits().len(), 1);
}

#[test]
fn test_missing_artifact_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let artifacts = vec![temp_dir.path().join("dark_mode.svg")];

    let vcs = RecordingVcs::new();
    assert!(publish_if_changed(&vcs, &artifacts, &target(None), date()).is_err());
    assert_eq!(vcs.calls(), vec![]);
}

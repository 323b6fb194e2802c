use crate::conf::{
    CONFIG_FILE, ConfigError, DEFAULT_AUDIT_LOG, DEFAULT_REPORTS_DIR, load_config, resolve_root,
};
use crate::metrics::{MatchMode, ReviewerClass};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_config(root: &Path, contents: &str) -> PathBuf {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_config_file_uses_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    // Act
    let cfg = load_config(root).unwrap();

    // Assert
    assert_eq!(cfg.source, None);
    assert_eq!(cfg.audit_log, root.join(DEFAULT_AUDIT_LOG));
    assert_eq!(cfg.reports_dir, root.join(DEFAULT_REPORTS_DIR));
    assert_eq!(cfg.reviewers.match_mode, MatchMode::CaseInsensitive);
    assert_eq!(cfg.reviewers.agent_markers, vec!["agent".to_string()]);
}

#[test]
fn configured_paths_resolve_against_root() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    let path = write_config(
        root,
        r#"
audit_log = "var/audit.ndjson"
reports_dir = "out"
"#,
    );

    // Act
    let cfg = load_config(root).unwrap();

    // Assert
    assert_eq!(cfg.source, Some(path));
    assert_eq!(cfg.audit_log, root.join("var/audit.ndjson"));
    assert_eq!(cfg.reports_dir, root.join("out"));
}

#[test]
fn absolute_paths_are_kept() {
    // Arrange
    let dir = tempdir().unwrap();
    let elsewhere = tempdir().unwrap();
    let log = elsewhere.path().join("audit_log.json");
    write_config(
        dir.path(),
        &format!("audit_log = {:?}\n", log.display().to_string()),
    );

    // Act
    let cfg = load_config(dir.path()).unwrap();

    // Assert
    assert_eq!(cfg.audit_log, log);
}

#[test]
fn legacy_match_mode_is_parsed() {
    // Arrange
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"
[reviewers]
match = "legacy"
"#,
    );

    // Act
    let policy = load_config(dir.path()).unwrap().reviewer_policy();

    // Assert
    assert_eq!(policy.mode(), MatchMode::Legacy);
    assert_eq!(policy.classify(Some("AGENT-7")), ReviewerClass::Human);
    assert_eq!(policy.classify(Some("sentinel-agent")), ReviewerClass::Agent);
}

#[test]
fn custom_markers_replace_the_default() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"
[reviewers]
agent_markers = ["Bot", "auto"]
"#,
    );

    let policy = load_config(dir.path()).unwrap().reviewer_policy();

    assert_eq!(policy.markers(), &["bot".to_string(), "auto".to_string()]);
    assert_eq!(policy.classify(Some("triage-BOT")), ReviewerClass::Agent);
    assert_eq!(policy.classify(Some("sentinel-agent")), ReviewerClass::Human);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "audit_log = ");

    // Act
    let err = load_config(dir.path()).unwrap_err();

    // Assert
    match err {
        ConfigError::Parse { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "audit_logs = \"typo.json\"\n");

    let err = load_config(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn empty_marker_list_is_rejected() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "[reviewers]\nagent_markers = []\n");

    let err = load_config(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::NoAgentMarkers { .. }));
}

#[test]
fn blank_marker_is_rejected() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "[reviewers]\nagent_markers = [\"agent\", \"  \"]\n");

    let err = load_config(dir.path()).unwrap_err();

    match err {
        ConfigError::InvalidMarker { marker, .. } => assert_eq!(marker, "  "),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn explicit_root_wins_over_install_root() {
    let root = resolve_root(Some(PathBuf::from("/srv/irl"))).unwrap();

    assert_eq!(root, PathBuf::from("/srv/irl"));
}

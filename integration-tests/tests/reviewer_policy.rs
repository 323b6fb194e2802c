use auditlens_core::metrics::{RunOutcome, run_metrics};
use integration_tests::harness::TestWorkspace;

fn agent_reviewed(ws: &TestWorkspace) -> u64 {
    match run_metrics(&ws.config()).expect("run failed") {
        RunOutcome::Written { report, .. } => report.summary.agent_reviewed,
        RunOutcome::NoData => panic!("expected a report"),
    }
}

/// Default policy ignores case: `ops-bot-AGENT` counts as an agent
#[test]
fn default_policy_matches_any_case() {
    // Arrange
    let ws = TestWorkspace::with_fixture("mixed_week.ndjson");

    // Act
    let agents = agent_reviewed(&ws);

    // Assert
    assert_eq!(agents, 3);
}

/// Legacy matching only accepts `agent` and `Agent`
#[test]
fn legacy_policy_misses_upper_case_agent() {
    // Arrange
    let ws = TestWorkspace::with_fixture("mixed_week.ndjson");
    ws.write_config(
        r#"
[reviewers]
match = "legacy"
"#,
    );

    // Act
    let agents = agent_reviewed(&ws);

    // Assert
    assert_eq!(agents, 2);
}

/// Custom markers replace the default one
#[test]
fn custom_markers_are_honoured() {
    // Arrange
    let ws = TestWorkspace::with_fixture("mixed_week.ndjson");
    ws.write_config(
        r#"
[reviewers]
agent_markers = ["bot"]
"#,
    );

    // Act
    let agents = agent_reviewed(&ws);

    // Assert
    // only ops-bot-AGENT contains "bot"
    assert_eq!(agents, 1);
}

/// Paths in the config file are resolved against the install root
#[test]
fn configured_paths_are_used() {
    // Arrange
    let ws = TestWorkspace::empty();
    std::fs::create_dir_all(ws.root().join("logs")).unwrap();
    std::fs::write(
        ws.root().join("logs/review.ndjson"),
        r#"{"status":"REJECTED","rejected_by":"triage-agent"}"#,
    )
    .unwrap();
    ws.write_config(
        r#"
audit_log = "logs/review.ndjson"
reports_dir = "out"
"#,
    );

    // Act
    let outcome = run_metrics(&ws.config()).expect("run failed");

    // Assert
    let RunOutcome::Written { paths, .. } = outcome else {
        panic!("expected a report");
    };
    assert!(paths.json.starts_with(ws.root().join("out")));
}

use auditlens_core::conf::{DEFAULT_AUDIT_LOG, DEFAULT_REPORTS_DIR, MetricsConfig, load_config};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Handle to a throwaway install root laid out like a real deployment.
///
/// Every test gets its own directory, so tests are parallel-safe.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// An empty root: no audit log, no reports directory.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp root"),
        }
    }

    /// A root whose audit log is a copy of `fixtures/<fixture>`.
    pub fn with_fixture(fixture: &str) -> Self {
        let contents = fs::read_to_string(fixture_path(fixture))
            .unwrap_or_else(|e| panic!("failed to read fixture {fixture}: {e}"));
        Self::with_log(&contents)
    }

    pub fn with_log(contents: &str) -> Self {
        let ws = Self::empty();
        let log = ws.audit_log();
        fs::create_dir_all(log.parent().unwrap()).unwrap();
        fs::write(&log, contents).unwrap();
        ws
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn audit_log(&self) -> PathBuf {
        self.root().join(DEFAULT_AUDIT_LOG)
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.root().join(DEFAULT_REPORTS_DIR)
    }

    pub fn write_config(&self, toml: &str) {
        fs::write(self.root().join("auditlens.toml"), toml).unwrap();
    }

    pub fn config(&self) -> MetricsConfig {
        load_config(self.root()).expect("failed to load config")
    }

    /// Files currently in the reports directory, sorted by name.
    pub fn report_files(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(self.reports_dir()) else {
            return Vec::new();
        };

        let mut files: Vec<_> = entries.filter_map(Result::ok).map(|e| e.path()).collect();
        files.sort();
        files
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

use crate::metrics::{MatchMode, ReviewerPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "auditlens.toml";
pub const DEFAULT_AUDIT_LOG: &str = "irl/audit_log.json";
pub const DEFAULT_REPORTS_DIR: &str = "docs/metrics";

/// `auditlens.toml` as written on disk. Every key is optional.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub audit_log: Option<PathBuf>,
    pub reports_dir: Option<PathBuf>,
    #[serde(default)]
    pub reviewers: ReviewersSpec,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewersSpec {
    #[serde(default, rename = "match")]
    pub match_mode: MatchMode,

    #[serde(default = "default_agent_markers")]
    pub agent_markers: Vec<String>,
}

impl Default for ReviewersSpec {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::default(),
            agent_markers: default_agent_markers(),
        }
    }
}

fn default_agent_markers() -> Vec<String> {
    vec!["agent".to_string()]
}

/// Resolved configuration: every path is absolute or relative to the process, never to the
/// config file.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsConfig {
    pub root: PathBuf,
    /// Where the config was read from, if a file existed.
    pub source: Option<PathBuf>,
    pub audit_log: PathBuf,
    pub reports_dir: PathBuf,
    pub reviewers: ResolvedReviewers,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedReviewers {
    #[serde(rename = "match")]
    pub match_mode: MatchMode,
    pub agent_markers: Vec<String>,
}

impl MetricsConfig {
    pub fn reviewer_policy(&self) -> ReviewerPolicy {
        ReviewerPolicy::new(
            self.reviewers.match_mode,
            self.reviewers.agent_markers.clone(),
        )
    }
}

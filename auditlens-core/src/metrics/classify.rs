use crate::metrics::types::{AuditEvent, IncidentStatus, Operation, Outcome, ReviewerClass};
use serde::{Deserialize, Serialize};

/// How a reviewer identity string is matched against the agent markers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// `sentinel-AGENT` and `Agent Smith` both count as agents.
    #[default]
    CaseInsensitive,
    /// Marker as written, or with its first letter upper-cased (`agent` / `Agent`).
    Legacy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewerPolicy {
    mode: MatchMode,
    markers: Vec<String>,
}

impl Default for ReviewerPolicy {
    fn default() -> Self {
        Self::new(MatchMode::default(), vec!["agent".to_string()])
    }
}

impl ReviewerPolicy {
    pub fn new(mode: MatchMode, markers: Vec<String>) -> Self {
        let markers = match mode {
            MatchMode::CaseInsensitive => markers.iter().map(|m| m.to_lowercase()).collect(),
            MatchMode::Legacy => markers,
        };
        Self { mode, markers }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Missing identities are classified as human.
    pub fn classify(&self, reviewer: Option<&str>) -> ReviewerClass {
        let Some(reviewer) = reviewer else {
            return ReviewerClass::Human;
        };

        let is_agent = match self.mode {
            MatchMode::CaseInsensitive => {
                let reviewer = reviewer.to_lowercase();
                self.markers.iter().any(|m| reviewer.contains(m.as_str()))
            }
            MatchMode::Legacy => self
                .markers
                .iter()
                .any(|m| reviewer.contains(m.as_str()) || reviewer.contains(&capitalize(m))),
        };

        if is_agent {
            ReviewerClass::Agent
        } else {
            ReviewerClass::Human
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The labels the aggregation step folds on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub completed: bool,
    pub quarantined: bool,
    pub outcome: Outcome,
    pub reviewer: ReviewerClass,
    pub operation: Option<Operation>,
}

pub fn classify(event: &AuditEvent, policy: &ReviewerPolicy) -> Classification {
    let outcome = match event.status {
        Some(IncidentStatus::Released) => Outcome::Released,
        Some(IncidentStatus::Rejected) => Outcome::Rejected,
        _ => Outcome::Other,
    };

    Classification {
        completed: outcome != Outcome::Other,
        quarantined: matches!(event.status, Some(IncidentStatus::Quarantined)),
        outcome,
        reviewer: policy.classify(event.reviewer()),
        operation: event.action.as_deref().and_then(Operation::from_action),
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// One record of the audit log.
///
/// Every field is optional: a record only carries what the incident lifecycle chose to write,
/// and "not recorded" must stay distinguishable from zero or empty values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuditEvent {
    pub incident_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    /// Raw `action` string, kept even when it is not a recognized operation.
    pub action: Option<String>,
    pub status: Option<IncidentStatus>,
    pub approved_by: Option<String>,
    pub rejected_by: Option<String>,
    pub duration_ms: Option<u64>,
    pub drift_report_ids: Option<Vec<String>>,
}

impl AuditEvent {
    /// Whichever reviewer identity is present. `approved_by` wins if both are.
    pub fn reviewer(&self) -> Option<&str> {
        self.approved_by
            .as_deref()
            .or(self.rejected_by.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncidentStatus {
    Quarantined,
    Released,
    Rejected,
    Other(String),
}

impl IncidentStatus {
    pub fn from_log(s: &str) -> Self {
        match s {
            "QUARANTINED" => Self::Quarantined,
            "RELEASED" => Self::Released,
            "REJECTED" => Self::Rejected,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_incident(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    pub fn is_completed_review(&self) -> bool {
        matches!(self, Self::Released | Self::Rejected)
    }
}

/// The fixed operation vocabulary of the review tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    List,
    Preview,
    Approve,
    Reject,
}

impl Operation {
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "list_quarantined" => Some(Self::List),
            "preview_incident" => Some(Self::Preview),
            "approve_patch" => Some(Self::Approve),
            "reject_incident" => Some(Self::Reject),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Preview => "preview",
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewerClass {
    Agent,
    Human,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Released,
    Rejected,
    Other,
}

/// ISO-8601 week identifier, ordered chronologically and rendered as `YYYY-Www`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn of(ts: &DateTime<Utc>) -> Self {
        use chrono::Datelike;

        let iso = ts.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

impl Serialize for WeekKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

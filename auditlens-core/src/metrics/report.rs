use crate::metrics::aggregation::{MetricsAccumulator, WeeklyTally};
use crate::metrics::stats::{DerivedStats, ms_to_seconds};
use crate::metrics::types::{Operation, WeekKey};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// The document produced by one run. Both serializations render from this value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub summary: Summary,
    pub time_savings: TimeSavings,
    pub averages: Averages,
    pub weekly: BTreeMap<WeekKey, WeeklyEntry>,
    pub drift: DriftSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub log_entries: u64,
    pub skipped_lines: u64,
    pub total_incidents: u64,
    pub quarantined: u64,
    pub agent_reviewed: u64,
    pub human_reviewed: u64,
    pub agent_approved: u64,
    pub agent_rejected: u64,
    pub human_approved: u64,
    pub human_rejected: u64,
    /// Percent, `null` when the class reviewed nothing.
    pub agent_approval_rate: Option<f64>,
    pub human_approval_rate: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSavings {
    pub agent_total_time_ms: u64,
    pub human_total_time_ms: u64,
    pub time_saved_ms: i64,
    pub percentage_saved: Option<f64>,
    pub speedup: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Averages {
    pub operations: BTreeMap<Operation, OperationEntry>,
    pub agent_avg_time_ms: Option<f64>,
    pub human_avg_time_ms: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationEntry {
    pub avg_time_ms: f64,
    pub avg_time_sec: f64,
    pub total_count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyEntry {
    pub incidents: u64,
    pub agent_approved: u64,
    pub human_approved: u64,
    pub agent_rejected: u64,
    pub human_rejected: u64,
    pub agent_time_ms: u64,
    pub human_time_ms: u64,
}

impl From<&WeeklyTally> for WeeklyEntry {
    fn from(w: &WeeklyTally) -> Self {
        Self {
            incidents: w.incidents,
            agent_approved: w.agent_approved,
            human_approved: w.human_approved,
            agent_rejected: w.agent_rejected,
            human_rejected: w.human_rejected,
            agent_time_ms: w.agent_time_ms,
            human_time_ms: w.human_time_ms,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftSummary {
    pub linked_events: u64,
    pub distinct_reports: u64,
}

pub fn build_report(
    acc: &MetricsAccumulator,
    stats: &DerivedStats,
    skipped_lines: u64,
    generated_at: DateTime<Utc>,
) -> Report {
    Report {
        generated_at,
        summary: Summary {
            log_entries: acc.events_seen,
            skipped_lines,
            total_incidents: acc.total_incidents,
            quarantined: acc.quarantined,
            agent_reviewed: acc.agent.reviewed,
            human_reviewed: acc.human.reviewed,
            agent_approved: acc.agent.approved,
            agent_rejected: acc.agent.rejected,
            human_approved: acc.human.approved,
            human_rejected: acc.human.rejected,
            agent_approval_rate: stats.agent_approval_rate,
            human_approval_rate: stats.human_approval_rate,
        },
        time_savings: TimeSavings {
            agent_total_time_ms: acc.agent.time_ms,
            human_total_time_ms: acc.human.time_ms,
            time_saved_ms: stats.time_saved_ms,
            percentage_saved: stats.percentage_saved,
            speedup: stats.speedup,
        },
        averages: Averages {
            operations: stats
                .operations
                .iter()
                .map(|(op, avg)| {
                    (
                        *op,
                        OperationEntry {
                            avg_time_ms: avg.avg_time_ms,
                            avg_time_sec: ms_to_seconds(avg.avg_time_ms),
                            total_count: avg.total_count,
                        },
                    )
                })
                .collect(),
            agent_avg_time_ms: stats.agent_avg_time_ms,
            human_avg_time_ms: stats.human_avg_time_ms,
        },
        weekly: acc
            .weekly
            .iter()
            .map(|(k, w)| (*k, WeeklyEntry::from(w)))
            .collect(),
        drift: DriftSummary {
            linked_events: acc.drift_linked_events,
            distinct_reports: acc.drift_reports.len() as u64,
        },
    }
}

use crate::conf::MetricsConfig;
use crate::metrics::aggregation::MetricsAccumulator;
use crate::metrics::classify::ReviewerPolicy;
use crate::metrics::error::MetricsError;
use crate::metrics::output::{ReportPaths, write_report};
use crate::metrics::parse::parse_event;
use crate::metrics::reader::{LogRead, read_audit_log};
use crate::metrics::report::{Report, build_report};
use crate::metrics::stats::derive_stats;
use crate::metrics::types::AuditEvent;
use chrono::{DateTime, Utc};

#[derive(Debug)]
pub enum RunOutcome {
    /// The log was absent or held no usable entries. Nothing was written.
    NoData,
    Written { report: Report, paths: ReportPaths },
}

pub fn run_metrics(config: &MetricsConfig) -> Result<RunOutcome, MetricsError> {
    let read = read_audit_log(&config.audit_log)?;
    tracing::info!(
        path = %config.audit_log.display(),
        entries = read.records.len(),
        skipped = read.skipped,
        "audit log loaded"
    );

    let Some(report) = compute_report(&read, &config.reviewer_policy(), Utc::now()) else {
        tracing::warn!(
            path = %config.audit_log.display(),
            "No log entries found. Make sure the audit log exists and has data."
        );
        return Ok(RunOutcome::NoData);
    };

    let paths = write_report(&config.reports_dir, &report)?;
    Ok(RunOutcome::Written { report, paths })
}

/// Reader output to report, without touching the filesystem.
///
/// `None` when no record survives parsing.
pub fn compute_report(
    read: &LogRead,
    policy: &ReviewerPolicy,
    generated_at: DateTime<Utc>,
) -> Option<Report> {
    let mut skipped = read.skipped as u64;
    let events: Vec<AuditEvent> = read
        .records
        .iter()
        .filter_map(|record| {
            let event = parse_event(record);
            if event.is_none() {
                tracing::warn!(record = %record, "audit log entry is not a JSON object");
                skipped += 1;
            }
            event
        })
        .collect();

    if events.is_empty() {
        return None;
    }

    let acc = MetricsAccumulator::fold(&events, policy);
    let stats = derive_stats(&acc);
    Some(build_report(&acc, &stats, skipped, generated_at))
}

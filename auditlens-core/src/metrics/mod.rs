//! Audit Log Metrics Pipeline
//!
//! This module turns the incident review audit log into a metrics report comparing agent
//! reviewers against human reviewers.
//!
//! The log is append-only NDJSON owned by the incident lifecycle. We read it, never write it.
//! Every line is parsed on its own: a broken line (including a half-written last line while
//! the writer is appending) is skipped with a warning and the run carries on.
//!
//! Each event is classified (completed review or not, agent or human, which operation) and
//! folded into a single accumulator along three dimensions: global counters, per-operation
//! latency sums, and per-ISO-week buckets. Ratios are derived afterwards in one pass, with
//! every zero denominator surfacing as "not applicable" instead of a number.
//!
//! The overall data processing architecture is:
//!
//! audit_log.json
//! read_audit_log
//! parse_event
//! AuditEvent
//! classify
//! MetricsAccumulator
//! derive_stats
//! Report
//! render_json / render_markdown
//!

mod aggregation;
mod classify;
mod error;
mod output;
mod parse;
mod reader;
mod render;
mod report;
mod run;
mod stats;
mod types;

#[cfg(test)]
mod tests;

pub use aggregation::{ClassTally, MetricsAccumulator, OperationTally, WeeklyTally};
pub use classify::{Classification, MatchMode, ReviewerPolicy, classify};
pub use error::MetricsError;
pub use output::{ReportPaths, write_report};
pub use parse::parse_event;
pub use reader::{LogRead, parse_lines, read_audit_log};
pub use render::{render_json, render_markdown, render_summary};
pub use report::{Averages, DriftSummary, OperationEntry, Report, Summary, TimeSavings, WeeklyEntry, build_report};
pub use run::{RunOutcome, compute_report, run_metrics};
pub use stats::{DerivedStats, OperationAverage, derive_stats};
pub use types::{AuditEvent, IncidentStatus, Operation, Outcome, ReviewerClass, WeekKey};

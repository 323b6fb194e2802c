use crate::metrics::classify::{Classification, ReviewerPolicy, classify};
use crate::metrics::types::{AuditEvent, Operation, Outcome, ReviewerClass, WeekKey};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassTally {
    pub reviewed: u64,
    pub approved: u64,
    pub rejected: u64,
    /// Sum of every recorded duration attributed to this class, reviewed or not.
    pub time_ms: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperationTally {
    pub count: u64,
    pub total_time_ms: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeeklyTally {
    pub incidents: u64,
    pub agent_approved: u64,
    pub human_approved: u64,
    pub agent_rejected: u64,
    pub human_rejected: u64,
    pub agent_time_ms: u64,
    pub human_time_ms: u64,
}

impl WeeklyTally {
    fn push(&mut self, c: &Classification, duration_ms: Option<u64>) {
        self.incidents += 1;

        match (c.reviewer, c.outcome) {
            (ReviewerClass::Agent, Outcome::Released) => self.agent_approved += 1,
            (ReviewerClass::Human, Outcome::Released) => self.human_approved += 1,
            (ReviewerClass::Agent, Outcome::Rejected) => self.agent_rejected += 1,
            (ReviewerClass::Human, Outcome::Rejected) => self.human_rejected += 1,
            (_, Outcome::Other) => {}
        }

        if let Some(ms) = duration_ms {
            match c.reviewer {
                ReviewerClass::Agent => self.agent_time_ms = self.agent_time_ms.saturating_add(ms),
                ReviewerClass::Human => self.human_time_ms = self.human_time_ms.saturating_add(ms),
            }
        }
    }
}

/// Fold state of one run.
///
/// Built once by [`MetricsAccumulator::fold`] and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsAccumulator {
    pub events_seen: u64,
    pub total_incidents: u64,
    pub quarantined: u64,
    pub agent: ClassTally,
    pub human: ClassTally,
    /// Only operations with at least one recorded duration have an entry.
    pub operations: BTreeMap<Operation, OperationTally>,
    /// Only weeks with at least one timestamped completed review have an entry.
    pub weekly: BTreeMap<WeekKey, WeeklyTally>,
    pub drift_linked_events: u64,
    pub drift_reports: BTreeSet<String>,
}

impl MetricsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fold<'a, I>(events: I, policy: &ReviewerPolicy) -> Self
    where
        I: IntoIterator<Item = &'a AuditEvent>,
    {
        let mut acc = Self::new();
        for event in events {
            let c = classify(event, policy);
            acc.push(event, &c);
        }
        acc
    }

    fn class_mut(&mut self, class: ReviewerClass) -> &mut ClassTally {
        match class {
            ReviewerClass::Agent => &mut self.agent,
            ReviewerClass::Human => &mut self.human,
        }
    }

    pub(crate) fn push(&mut self, event: &AuditEvent, c: &Classification) {
        self.events_seen += 1;

        if event.status.as_ref().is_some_and(|s| s.is_incident()) {
            self.total_incidents += 1;
        }
        if c.quarantined {
            self.quarantined += 1;
        }

        if c.completed {
            let tally = self.class_mut(c.reviewer);
            tally.reviewed += 1;
            match c.outcome {
                Outcome::Released => tally.approved += 1,
                Outcome::Rejected => tally.rejected += 1,
                Outcome::Other => {}
            }
        }

        if let Some(ms) = event.duration_ms {
            let tally = self.class_mut(c.reviewer);
            tally.time_ms = tally.time_ms.saturating_add(ms);

            if let Some(op) = c.operation {
                let op = self.operations.entry(op).or_default();
                op.count += 1;
                op.total_time_ms = op.total_time_ms.saturating_add(ms);
            }
        }

        if c.completed {
            if let Some(ts) = &event.timestamp {
                let key = WeekKey::of(ts);
                let week = self.weekly.entry(key).or_insert_with(|| {
                    tracing::debug!(week = %key, "opening weekly bucket");
                    WeeklyTally::default()
                });
                week.push(c, event.duration_ms);
            }
        }

        if let Some(ids) = &event.drift_report_ids {
            if !ids.is_empty() {
                self.drift_linked_events += 1;
                self.drift_reports.extend(ids.iter().cloned());
            }
        }
    }
}

use crate::metrics::aggregation::{ClassTally, MetricsAccumulator};
use crate::metrics::types::Operation;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
pub struct OperationAverage {
    pub avg_time_ms: f64,
    pub total_count: u64,
}

/// Ratios computed from a finished accumulator. `None` means "not applicable".
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedStats {
    pub operations: BTreeMap<Operation, OperationAverage>,
    pub agent_avg_time_ms: Option<f64>,
    pub human_avg_time_ms: Option<f64>,
    pub speedup: Option<f64>,
    pub agent_approval_rate: Option<f64>,
    pub human_approval_rate: Option<f64>,
    /// Human total minus agent total. Not normalized by either population size.
    pub time_saved_ms: i64,
    pub percentage_saved: Option<f64>,
}

pub fn derive_stats(acc: &MetricsAccumulator) -> DerivedStats {
    let operations = acc
        .operations
        .iter()
        .filter_map(|(op, tally)| {
            ratio(tally.total_time_ms, tally.count).map(|avg| {
                (
                    *op,
                    OperationAverage {
                        avg_time_ms: avg,
                        total_count: tally.count,
                    },
                )
            })
        })
        .collect();

    let agent_avg_time_ms = average_review_time(&acc.agent);
    let human_avg_time_ms = average_review_time(&acc.human);

    let speedup = match (human_avg_time_ms, agent_avg_time_ms) {
        (Some(human), Some(agent)) if agent > 0.0 => Some(human / agent),
        _ => None,
    };

    let time_saved_ms = saved_ms(acc.human.time_ms, acc.agent.time_ms);
    let percentage_saved = (acc.human.time_ms > 0)
        .then(|| time_saved_ms as f64 / acc.human.time_ms as f64 * 100.0);

    DerivedStats {
        operations,
        agent_avg_time_ms,
        human_avg_time_ms,
        speedup,
        agent_approval_rate: approval_rate(&acc.agent),
        human_approval_rate: approval_rate(&acc.human),
        time_saved_ms,
        percentage_saved,
    }
}

/// Signed `human - agent`, clamped to the `i64` range.
fn saved_ms(human_ms: u64, agent_ms: u64) -> i64 {
    let delta = i128::from(human_ms) - i128::from(agent_ms);
    i64::try_from(delta).unwrap_or(if delta > 0 { i64::MAX } else { i64::MIN })
}

fn average_review_time(tally: &ClassTally) -> Option<f64> {
    ratio(tally.time_ms, tally.reviewed)
}

fn approval_rate(tally: &ClassTally) -> Option<f64> {
    ratio(tally.approved, tally.reviewed).map(|r| r * 100.0)
}

fn ratio(num: u64, den: u64) -> Option<f64> {
    (den > 0).then(|| num as f64 / den as f64)
}

/// Milliseconds to minutes, as shown in the narrative report.
pub fn ms_to_minutes(ms: f64) -> f64 {
    ms / 1000.0 / 60.0
}

pub fn ms_to_seconds(ms: f64) -> f64 {
    ms / 1000.0
}

use crate::metrics::error::MetricsError;
use crate::metrics::report::Report;
use crate::metrics::stats::{ms_to_minutes, ms_to_seconds};

const NOT_APPLICABLE: &str = "N/A";

pub fn render_json(report: &Report) -> Result<String, MetricsError> {
    serde_json::to_string_pretty(report).map_err(|source| MetricsError::Serialize { source })
}

/// Narrative rendering. Section order: metadata, summary, time savings, averages, weekly.
pub fn render_markdown(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("# Agent Metrics Report\n\n");
    out.push_str(&format!("Generated: {}\n\n", report.generated_at.to_rfc3339()));

    let s = &report.summary;
    out.push_str("## Summary\n\n");
    out.push_str(&format!("- **Total Incidents**: {}\n", s.total_incidents));
    out.push_str(&format!("- **Quarantined**: {}\n", s.quarantined));
    out.push_str(&format!("- **Agent Reviewed**: {}\n", s.agent_reviewed));
    out.push_str(&format!("- **Human Reviewed**: {}\n", s.human_reviewed));
    out.push_str(&format!(
        "- **Agent Approval Rate**: {}\n",
        percent(s.agent_approval_rate)
    ));
    out.push_str(&format!(
        "- **Human Approval Rate**: {}\n",
        percent(s.human_approval_rate)
    ));
    out.push_str(&format!(
        "- **Log Entries**: {} ({} skipped)\n\n",
        s.log_entries, s.skipped_lines
    ));

    let t = &report.time_savings;
    out.push_str("## Time Savings\n\n");
    out.push_str(&format!(
        "- **Agent Total Time**: {}\n",
        minutes(t.agent_total_time_ms as f64)
    ));
    out.push_str(&format!(
        "- **Human Total Time**: {}\n",
        minutes(t.human_total_time_ms as f64)
    ));
    out.push_str(&format!(
        "- **Time Saved**: {}\n",
        minutes(t.time_saved_ms as f64)
    ));
    out.push_str(&format!(
        "- **Percentage Saved**: {}\n",
        percent(t.percentage_saved)
    ));
    out.push_str(&format!("- **Speedup**: {}\n\n", speedup(t.speedup)));

    let a = &report.averages;
    out.push_str("## Average Times\n\n");
    if a.operations.is_empty() {
        out.push_str("No operation durations recorded.\n\n");
    } else {
        out.push_str("| Operation | Count | Avg (s) |\n");
        out.push_str("|-----------|-------|---------|\n");
        for (op, entry) in &a.operations {
            out.push_str(&format!(
                "| {} | {} | {:.2} |\n",
                op, entry.total_count, entry.avg_time_sec
            ));
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "- **Agent Avg Time**: {}\n",
        seconds(a.agent_avg_time_ms)
    ));
    out.push_str(&format!(
        "- **Human Avg Time**: {}\n\n",
        seconds(a.human_avg_time_ms)
    ));

    out.push_str("## Weekly Breakdown\n\n");
    if report.weekly.is_empty() {
        out.push_str("No timestamped reviews.\n\n");
    }
    for (week, w) in &report.weekly {
        out.push_str(&format!("### {week}\n"));
        out.push_str(&format!("- Incidents: {}\n", w.incidents));
        out.push_str(&format!("- Agent Approved: {}\n", w.agent_approved));
        out.push_str(&format!("- Human Approved: {}\n", w.human_approved));
        out.push_str(&format!("- Agent Rejected: {}\n", w.agent_rejected));
        out.push_str(&format!("- Human Rejected: {}\n", w.human_rejected));
        out.push_str(&format!(
            "- Agent Time: {}\n",
            minutes(w.agent_time_ms as f64)
        ));
        out.push_str(&format!(
            "- Human Time: {}\n\n",
            minutes(w.human_time_ms as f64)
        ));
    }

    out.push_str("## Drift Reports\n\n");
    out.push_str(&format!(
        "- **Linked Events**: {}\n- **Distinct Reports**: {}\n",
        report.drift.linked_events, report.drift.distinct_reports
    ));

    out
}

/// Short console summary printed after a successful run.
pub fn render_summary(report: &Report) -> String {
    let s = &report.summary;
    let t = &report.time_savings;

    format!(
        "Summary:\n\
         \x20 Total Incidents: {}\n\
         \x20 Agent Reviewed: {}\n\
         \x20 Human Reviewed: {}\n\
         \x20 Time Saved: {}\n\
         \x20 Speedup: {}\n",
        s.total_incidents,
        s.agent_reviewed,
        s.human_reviewed,
        percent(t.percentage_saved),
        speedup(t.speedup)
    )
}

fn percent(v: Option<f64>) -> String {
    v.map(|p| format!("{p:.1}%"))
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

fn speedup(v: Option<f64>) -> String {
    v.map(|x| format!("{x:.1}x faster"))
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

fn seconds(ms: Option<f64>) -> String {
    ms.map(|ms| format!("{:.2} seconds", ms_to_seconds(ms)))
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

fn minutes(ms: f64) -> String {
    format!("{:.1} minutes", ms_to_minutes(ms))
}

use crate::metrics::types::{AuditEvent, IncidentStatus};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Lift one raw log record into an [`AuditEvent`].
///
/// Returns `None` when the record is not a JSON object. Fields of the wrong type are treated as
/// not recorded rather than rejecting the whole record.
pub fn parse_event(record: &Value) -> Option<AuditEvent> {
    let obj = record.as_object()?;

    let incident_id = obj
        .get("incident_id")
        .and_then(Value::as_str)
        .map(str::to_string);

    let timestamp = obj.get("timestamp").and_then(|raw| {
        let ts = parse_timestamp(raw);
        if ts.is_none() && !raw.is_null() {
            tracing::warn!(
                incident_id = incident_id.as_deref().unwrap_or("-"),
                timestamp = %raw,
                "unrecognized timestamp, event left out of weekly breakdown"
            );
        }
        ts
    });

    Some(AuditEvent {
        incident_id,
        timestamp,
        action: obj
            .get("action")
            .and_then(Value::as_str)
            .map(str::to_string),
        status: obj
            .get("status")
            .and_then(Value::as_str)
            .map(IncidentStatus::from_log),
        approved_by: non_empty_str(obj.get("approved_by")),
        rejected_by: non_empty_str(obj.get("rejected_by")),
        // negative or fractional durations are not a valid measurement
        duration_ms: obj.get("duration_ms").and_then(Value::as_u64),
        drift_report_ids: obj.get("drift_report_ids").and_then(|v| {
            let ids = v
                .as_array()?
                .iter()
                .filter_map(|id| match id {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect();
            Some(ids)
        }),
    })
}

/// RFC 3339, offset-less date-time or bare date strings, or integer epoch milliseconds.
///
/// Values without an offset are read as UTC; a bare date is midnight.
fn parse_timestamp(v: &Value) -> Option<DateTime<Utc>> {
    match v {
        Value::String(s) => parse_timestamp_str(s.trim()),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn non_empty_str(v: Option<&Value>) -> Option<String> {
    v.and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

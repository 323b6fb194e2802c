use crate::metrics::error::MetricsError;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

/// Raw records of one read, in on-disk order.
#[derive(Debug, Default)]
pub struct LogRead {
    pub records: Vec<Value>,
    /// Lines that were not valid UTF-8 JSON.
    pub skipped: usize,
}

impl LogRead {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load the newline-delimited audit log.
///
/// A missing file is an empty read. Blank lines are ignored and a line that fails to parse is
/// dropped with a warning; this includes a half-written final line when the log is being
/// appended to concurrently, even one cut inside a multi-byte character.
pub fn read_audit_log(path: &Path) -> Result<LogRead, MetricsError> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "audit log not found");
            return Ok(LogRead::default());
        }
        Err(e) => return Err(MetricsError::read_log(path, e)),
    };

    Ok(parse_lines(&raw))
}

/// Split raw log bytes into records. UTF-8 is checked per line, so one damaged line never
/// costs the rest of the file.
pub fn parse_lines(raw: &[u8]) -> LogRead {
    let mut read = LogRead::default();

    for (idx, line) in raw.split(|b| *b == b'\n').enumerate() {
        let line = line.trim_ascii();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_slice::<Value>(line) {
            Ok(record) => read.records.push(record),
            Err(e) => {
                tracing::warn!(
                    line = idx + 1,
                    error = %e,
                    content = %String::from_utf8_lossy(line),
                    "failed to parse audit log line"
                );
                read.skipped += 1;
            }
        }
    }

    read
}

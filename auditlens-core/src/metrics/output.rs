use crate::metrics::error::MetricsError;
use crate::metrics::render::{render_json, render_markdown};
use crate::metrics::report::Report;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub markdown: PathBuf,
}

impl ReportPaths {
    /// `metrics-<epoch-ms>.{json,md}` inside `dir`, stamped with the report's generation instant.
    pub fn for_report(dir: &Path, report: &Report) -> Self {
        let stamp = report.generated_at.timestamp_millis();
        Self {
            json: dir.join(format!("metrics-{stamp}.json")),
            markdown: dir.join(format!("metrics-{stamp}.md")),
        }
    }
}

/// Write both serializations of `report` as new files.
///
/// Both documents are rendered before anything touches the disk. Existing files are never
/// replaced: a name collision fails the write. A failure on the JSON file leaves the Markdown
/// file unwritten.
pub fn write_report(dir: &Path, report: &Report) -> Result<ReportPaths, MetricsError> {
    let json = render_json(report)?;
    let markdown = render_markdown(report);

    fs::create_dir_all(dir).map_err(|source| MetricsError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let paths = ReportPaths::for_report(dir, report);
    write_new_file(&paths.json, &json)?;
    write_new_file(&paths.markdown, &markdown)?;

    tracing::info!(
        json = %paths.json.display(),
        markdown = %paths.markdown.display(),
        "metrics report written"
    );

    Ok(paths)
}

fn write_new_file(path: &Path, contents: &str) -> Result<(), MetricsError> {
    let mut f = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| MetricsError::write_report(path, e))?;

    f.write_all(contents.as_bytes())
        .map_err(|e| MetricsError::write_report(path, e))
}

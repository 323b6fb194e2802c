use crate::conf::error::ConfigError;
use crate::conf::types::{
    CONFIG_FILE, ConfigFile, DEFAULT_AUDIT_LOG, DEFAULT_REPORTS_DIR, MetricsConfig,
    ResolvedReviewers,
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Load the configuration rooted at `root`.
///
/// A missing `auditlens.toml` yields the defaults. Relative paths are resolved against `root`.
pub fn load_config(root: &Path) -> Result<MetricsConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);

    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing (absence is fine)
    //--------------------------------------------------------------------------
    let (file, source) = match fs::read_to_string(&path) {
        Ok(s) => {
            let file: ConfigFile = toml::from_str(&s).map_err(|e| ConfigError::parse(&path, e))?;
            (file, Some(path.clone()))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => (ConfigFile::default(), None),
        Err(e) => return Err(ConfigError::read_file(&path, e)),
    };

    //--------------------------------------------------------------------------
    // Validation
    //--------------------------------------------------------------------------
    if file.reviewers.agent_markers.is_empty() {
        return Err(ConfigError::NoAgentMarkers { path });
    }
    if let Some(marker) = file
        .reviewers
        .agent_markers
        .iter()
        .find(|m| m.trim().is_empty())
    {
        return Err(ConfigError::InvalidMarker {
            path,
            marker: marker.clone(),
        });
    }

    //--------------------------------------------------------------------------
    // Resolve
    //--------------------------------------------------------------------------
    let audit_log = resolve(root, file.audit_log, DEFAULT_AUDIT_LOG);
    let reports_dir = resolve(root, file.reports_dir, DEFAULT_REPORTS_DIR);

    Ok(MetricsConfig {
        root: root.to_path_buf(),
        source,
        audit_log,
        reports_dir,
        reviewers: ResolvedReviewers {
            match_mode: file.reviewers.match_mode,
            agent_markers: file.reviewers.agent_markers,
        },
    })
}

pub(crate) fn resolve(root: &Path, configured: Option<PathBuf>, default: &str) -> PathBuf {
    let path = configured.unwrap_or_else(|| PathBuf::from(default));
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

/// `explicit` when given, otherwise [`install_root`].
pub fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(root) => Ok(root),
        None => install_root(),
    }
}

/// Directory the fixed paths hang off: the parent of the directory holding the executable.
///
/// A binary installed as `<root>/bin/auditlens` reads `<root>/irl/audit_log.json`.
pub fn install_root() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(|source| ConfigError::RootUnavailable { source })?;
    let bin_dir = exe.parent().unwrap_or_else(|| Path::new("."));

    Ok(bin_dir.parent().unwrap_or(bin_dir).to_path_buf())
}

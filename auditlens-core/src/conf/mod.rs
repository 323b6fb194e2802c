mod error;
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{install_root, load_config, resolve_root};
pub use types::{
    CONFIG_FILE, ConfigFile, DEFAULT_AUDIT_LOG, DEFAULT_REPORTS_DIR, MetricsConfig,
    ResolvedReviewers, ReviewersSpec,
};

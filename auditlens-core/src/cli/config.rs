use crate::conf::{MetricsConfig, load_config, resolve_root};
use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Install root (defaults to the executable's parent directory)
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Print resolved configuration
    Dump {
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Check { root } => check(&resolve_root(root)?),
        ConfigCmd::Dump { root, json, yaml } => dump(&resolve_root(root)?, json, yaml),
    }
}

pub fn check(root: &Path) -> Result<()> {
    let cfg = load_config(root)?;

    for line in check_lines(&cfg) {
        println!("{line}");
    }

    Ok(())
}

pub(crate) fn check_lines(cfg: &MetricsConfig) -> Vec<String> {
    let source = match &cfg.source {
        Some(path) => format!("✔ Config loaded from {}", path.display()),
        None => "✔ No config file, using defaults".to_string(),
    };

    vec![
        source,
        format!(
            "✔ audit log: {}{}",
            cfg.audit_log.display(),
            if cfg.audit_log.exists() { "" } else { " (missing)" }
        ),
        format!("✔ reports dir: {}", cfg.reports_dir.display()),
        format!(
            "✔ {} agent markers ({:?} match)",
            cfg.reviewers.agent_markers.len(),
            cfg.reviewers.match_mode
        ),
    ]
}

pub fn dump(root: &Path, json: bool, yaml: bool) -> Result<()> {
    let cfg = load_config(root)?;

    if yaml && !json {
        dump_yaml(&cfg)?;
    } else {
        dump_json(&cfg)?;
    }

    Ok(())
}

fn dump_json<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}

use crate::conf::load_config;
use crate::metrics::{RunOutcome, render_summary, run_metrics};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

/// Run the batch: read the audit log, write both reports, print the console summary.
pub fn analyze(root: &Path) -> Result<RunOutcome> {
    let cfg = load_config(root)?;

    println!("Analyzing agent metrics...");

    let outcome = run_metrics(&cfg)?;
    match &outcome {
        RunOutcome::NoData => {
            println!();
            println!(
                "{} No log entries found. Make sure {} exists and has data.",
                "warning:".yellow().bold(),
                cfg.audit_log.display()
            );
        }
        RunOutcome::Written { report, paths } => {
            println!();
            println!("{} Metrics report generated:", "✔".green());
            println!("   JSON: {}", paths.json.display());
            println!("   Markdown: {}", paths.markdown.display());
            println!();
            print!("{}", render_summary(report));
        }
    }

    Ok(outcome)
}

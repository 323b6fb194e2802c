use auditlens_core::cli;
use auditlens_core::conf::resolve_root;
use auditlens_core::logging::{default_log_format, init_logging};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "auditlens",
    version,
    about = "auditlens: agent vs human review metrics from the incident audit log"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze the audit log and write a metrics report (default)
    Analyze {
        /// Install root the audit log and reports paths are relative to
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },
}

fn analyze(root: Option<PathBuf>) -> anyhow::Result<()> {
    let root = resolve_root(root)?;
    cli::analyze::analyze(&root)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    init_logging(default_log_format());

    let result = match cli.command {
        Some(Command::Analyze { root }) => analyze(root),
        Some(Command::Config { cmd }) => cli::config::run(cmd),
        None => analyze(None),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

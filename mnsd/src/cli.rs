use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "mnsd")]
#[command(about = "Mnscoin node daemon", long_about = None)]
pub struct Args {
    /// Path to configuration file (optional, uses defaults if not provided)
    #[arg(short, long)]
    pub config_path: Option<PathBuf>,

    /// Network (main, test, regtest, unittest)
    #[arg(short, long)]
    pub network: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Print the selected network's parameters as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// Skip the startup banner and configuration summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Whether decorated console output may go to stdout. JSON and quiet runs
    /// keep stdout for data only and report through the log on stderr.
    pub fn interactive(&self) -> bool {
        !self.json && !self.quiet
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}

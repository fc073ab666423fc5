use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON snapshot with `holdings` and `prices`
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Print the display state as JSON instead of logging it
    #[arg(long)]
    pub json: bool,

    /// Render the snapshot as cached data from a failed refresh
    #[arg(long)]
    pub stale: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Append log records to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<String>,
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dwell",
    version,
    about = "Per-place occupancy step functions from simulation stop logs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute one occupancy artifact per stopping place
    Usage(UsageArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct UsageArgs {
    /// Stop log to read
    #[arg(short = 's', long = "stop-output")]
    pub stop_output: PathBuf,

    /// Stopping-place attribute to track (parkingArea, busStop, ...)
    #[arg(short = 't', long = "stopping-place", default_value = "parkingArea")]
    pub stopping_place: String,

    /// Write step,number tables instead of XML documents
    #[arg(long)]
    pub csv: bool,

    /// Drop steps that repeat the previous occupancy
    #[arg(long)]
    pub only_changes: bool,

    /// Directory artifacts are written into (created if missing)
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Also write a machine-readable run summary to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

//! Command-line interface definition

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for lost-sounds
#[derive(Parser, Debug)]
#[command(author, version, about = "Ambient now-playing widget for the terminal", long_about = None)]
pub struct Args {
    /// Media source URL; the identifier follows `v=`
    #[arg(short, long, env = "LOST_SOUNDS_SOURCE_URL")]
    pub source_url: Option<String>,

    /// Config file path
    #[arg(short, long, env = "LOST_SOUNDS_CONFIG")]
    pub config: Option<String>,

    /// Length of the simulated media in seconds
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Skip the headline fetch
    #[arg(long)]
    pub no_news: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn", env = "LOST_SOUNDS_LOG")]
    pub log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

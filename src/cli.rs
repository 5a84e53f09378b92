use clap::Parser;
use std::path::PathBuf;

/// clocktime - normalize human-written clock times to 24-hour H:MM
#[derive(Debug, Parser)]
#[command(name = "clocktime")]
#[command(about = "Normalize clock times like \"6:37 PM\" or \"13:37\" to 24-hour H:MM", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Times to parse (if none are given, enters interactive mode)
    #[arg(value_name = "TIME")]
    pub times: Vec<String>,

    /// Print one JSON object per input instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

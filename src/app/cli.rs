use clap::Parser;
use std::path::PathBuf;

/// Vibelist - pick a genre, get a playlist 🎶
#[derive(Parser, Debug, Default)]
#[command(name = "vibelist", version, about)]
pub struct Args {
    /// Base URL of the playlist API (overrides VIBELIST_API_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Write logs here instead of the cache directory
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}

//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// nowplaying - a terminal dashboard for whatever playerctl is playing.
#[derive(Parser, Debug, Default)]
#[command(name = "nowplaying")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Only talk to this player (passed to `playerctl -p`).
    #[arg(short, long)]
    pub player: Option<String>,

    /// Refresh interval in milliseconds.
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,

    /// Config file to use instead of the default location.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub dump_config: bool,

    /// Print the current song once as plain text and exit.
    #[arg(long, conflicts_with = "dump_config")]
    pub once: bool,
}

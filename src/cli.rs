use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Calendar date matrix server.
#[derive(Parser)]
#[command(
    name = "date-matrix",
    version,
    about = "Month-view calendar grids over HTTP"
)]
pub struct Cli {
    /// Path to YAML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Port override for the HTTP server (overrides config).
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Print effective configuration (YAML) and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run (default: serve).
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server.
    Serve,
    /// Print the grid for a date as JSON and exit.
    Grid {
        /// Date in `YYYY-MM-DD` form.
        date: String,
    },
}

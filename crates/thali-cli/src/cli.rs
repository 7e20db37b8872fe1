//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thali::{ExportFormat, Section};

/// Thali: restaurant analytics dashboards
#[derive(Parser)]
#[command(name = "thali")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ingest a raw restaurant listings file and build a dashboard snapshot
    Analyze {
        /// Path to the listings file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the snapshot (default: <file>.dashboard.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Drop cuisines with fewer restaurants than this
        #[arg(long, default_value = "5")]
        min_cuisine_count: u32,

        /// Keep this many cuisines, by restaurant count
        #[arg(long, default_value = "8")]
        top_cuisines: usize,
    },

    /// Run data-quality checks on a snapshot
    Check {
        /// Path to a snapshot file (omit for the built-in snapshot)
        #[arg(value_name = "SNAPSHOT")]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the dashboard in the terminal
    Show {
        /// Path to a snapshot file (omit for the built-in snapshot)
        #[arg(value_name = "SNAPSHOT")]
        file: Option<PathBuf>,

        /// Render a single section (cuisines, cities, ratings, prices,
        /// localities, value_points)
        #[arg(short, long)]
        section: Option<Section>,
    },

    /// Serve the web dashboard and JSON API
    Serve {
        /// Path to a snapshot file (omit for the built-in snapshot)
        #[arg(value_name = "SNAPSHOT")]
        file: Option<PathBuf>,

        /// Port for the web server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        /// Don't automatically open the browser
        #[arg(long)]
        no_open: bool,
    },

    /// Export snapshot sections as delimited or JSON tables
    Export {
        /// Path to a snapshot file (omit for the built-in snapshot)
        #[arg(value_name = "SNAPSHOT")]
        file: Option<PathBuf>,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// Export a single section (default: all)
        #[arg(short, long)]
        section: Option<Section>,
    },
}

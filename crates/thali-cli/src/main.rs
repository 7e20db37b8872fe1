//! Thali CLI - restaurant analytics dashboards from one snapshot contract.

mod cli;
mod commands;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            file,
            output,
            min_cuisine_count,
            top_cuisines,
        } => commands::analyze::run(file, output, min_cuisine_count, top_cuisines, cli.verbose),

        Commands::Check { file, json } => commands::check::run(file, json, cli.verbose),

        Commands::Show { file, section } => commands::show::run(file, section, cli.verbose),

        Commands::Serve {
            file,
            port,
            no_open,
        } => commands::serve::run(file, port, no_open, cli.verbose),

        Commands::Export {
            file,
            output,
            format,
            section,
        } => commands::export::run(file, output, format, section, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

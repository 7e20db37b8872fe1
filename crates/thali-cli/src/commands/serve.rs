//! Serve command - web dashboard and JSON API.

use std::path::PathBuf;

use colored::Colorize;
use thali::Dataset;

use crate::server::{app, state::AppState};

pub fn run(
    file: Option<PathBuf>,
    port: u16,
    no_open: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = match &file {
        Some(path) => {
            if verbose {
                println!("Loading snapshot from {}", path.display());
            }
            Dataset::load(path)?
        }
        None => {
            println!(
                "{} No snapshot given, serving the built-in dataset",
                "Note:".yellow()
            );
            Dataset::builtin().clone()
        }
    };

    let label = dataset.meta.label.clone();
    let state = AppState::new(dataset, file.clone());

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting dashboard server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Snapshot: {}", label);
    match &file {
        Some(path) => println!("  File: {}", path.display()),
        None => println!("  File: (built-in)"),
    }
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    // Open browser if requested
    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    // Run the server
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(state, port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}

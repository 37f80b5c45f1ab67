//! rigup - idempotent developer workstation provisioner
//!
//! Drives an ordered catalog of install tasks: probe first, install through
//! the strategy that fits the host, merge shell PATH lines without
//! duplicates, and contain every per-task failure inside the final report.

use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod error;
mod host;
mod orchestrator;
mod probe;
mod progress;
mod rcfile;
mod report;
mod strategy;
mod temp;
mod verify;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(cli.home, cli.verbose, args),
        Commands::Verify(args) => commands::verify::run(cli.home, cli.verbose, args),
        Commands::List(args) => commands::list::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

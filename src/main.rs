//! trackersync - keep a local private-tracker list in sync with upstream
//!
//! Loads the local `trackers.json`, fetches the upstream list, copies newer
//! upstream records into the local ones (except excluded fields), adds
//! trackers only upstream knows about, and writes the list back sorted by name.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod merge;
mod store;
mod ui;
mod upstream;

use cli::{Cli, Commands};
use ui::Reporter;

fn main() {
    let cli = Cli::parse();
    let reporter = Reporter::new(cli.verbose);

    let result = match cli.command {
        Commands::Sync(args) => commands::sync::run(cli.config.as_deref(), &args, &reporter),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

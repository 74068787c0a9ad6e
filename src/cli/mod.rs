//! CLI definitions using clap derive API
//!
//! Argument types for each command live in their own submodule:
//! - sync: Sync command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod sync;

pub use completions::CompletionsArgs;
pub use sync::SyncArgs;

/// trackersync - keep a local tracker list in sync with upstream
#[derive(Parser, Debug)]
#[command(
    name = "trackersync",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Merge upstream private-tracker data into your local trackers.json",
    long_about = "trackersync fetches the upstream tracker list, copies newer upstream records \
                  into your local trackers.json field by field (never touching excluded fields \
                  such as 'Observatory Grade'), adds trackers you do not have yet, and writes the \
                  list back sorted by name.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  trackersync sync                                \x1b[90m# Sync ./trackers.json\x1b[0m\n   \
                  trackersync sync --dry-run -v                   \x1b[90m# Show what would change\x1b[0m\n   \
                  trackersync sync --exclude Notes                \x1b[90m# Also protect 'Notes'\x1b[0m\n   \
                  trackersync sync --upstream-file upstream.json  \x1b[90m# Merge from a local copy\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to ./trackersync.yaml, then the user config directory)
    #[arg(long, short = 'c', global = true, env = "TRACKERSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge upstream trackers into the local file
    Sync(SyncArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

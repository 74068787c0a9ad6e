use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Arguments for the sync command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Sync ./trackers.json with the default upstream:\n    trackersync sync\n\n\
                  Preview changes without writing:\n    trackersync sync --dry-run --verbose\n\n\
                  Sync a file elsewhere:\n    trackersync sync --local ~/trackers/trackers.json\n\n\
                  Merge from a downloaded copy:\n    trackersync sync --upstream-file upstream.json\n\n\
                  Protect more fields from upstream:\n    trackersync sync --exclude Notes --exclude Invites")]
pub struct SyncArgs {
    /// Local tracker file to update (default: trackers.json)
    #[arg(long, short = 'l', value_name = "PATH", env = "TRACKERSYNC_LOCAL")]
    pub local: Option<PathBuf>,

    /// Upstream URL to fetch (file:// URLs read from disk)
    #[arg(long, value_name = "URL", env = "TRACKERSYNC_UPSTREAM_URL")]
    pub upstream_url: Option<String>,

    /// Read the upstream list from a local file instead of fetching it
    #[arg(long, value_name = "PATH", conflicts_with = "upstream_url")]
    pub upstream_file: Option<PathBuf>,

    /// Field upstream may never write (repeatable; adds to the configured set)
    #[arg(long, short = 'x', value_name = "FIELD")]
    pub exclude: Vec<String>,

    /// Do not start from the default or configured excluded fields
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Report what would change without writing the local file
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

impl SyncArgs {
    /// Command-line settings to layer over the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            local_path: self.local.clone(),
            upstream_url: self.upstream_url.clone(),
            upstream_file: self.upstream_file.clone(),
            exclude: self.exclude.clone(),
            no_default_excludes: self.no_default_excludes,
        }
    }
}

//! Sync command implementation
//!
//! The sync process:
//! 1. Resolve configuration (flags, config file, defaults)
//! 2. Load the local tracker file
//! 3. Fetch the upstream tracker list
//! 4. Merge upstream into local
//! 5. Write the merged list back (skipped with --dry-run)
//!
//! Any failure aborts before step 5, so the local file is never partially
//! updated.

use std::path::Path;

use crate::cli::SyncArgs;
use crate::config::SyncConfig;
use crate::domain::{RecordSet, TrackerFile};
use crate::error::Result;
use crate::merge::{MergeResult, merge};
use crate::store;
use crate::ui::{Reporter, finish_spinner, summary};
use crate::upstream;

/// Run sync command
pub fn run(config_path: Option<&Path>, args: &SyncArgs, reporter: &Reporter) -> Result<()> {
    let config = SyncConfig::load(config_path, args.overrides())?;
    let result = execute(&config, args.dry_run, reporter)?;

    if args.dry_run {
        println!("{}", summary::dry_run_complete(&result));
    } else {
        println!("{}", summary::sync_complete(&result));
    }

    Ok(())
}

/// Load, fetch, merge and (unless `dry_run`) write back
pub fn execute(config: &SyncConfig, dry_run: bool, reporter: &Reporter) -> Result<MergeResult> {
    reporter.debug(format!("Local file: {}", config.local_path.display()));
    reporter.debug(format!("Upstream: {}", config.upstream.describe()));
    if config.excluded_fields.is_empty() {
        reporter.debug("Excluded fields: (none)");
    } else {
        reporter.debug(format!(
            "Excluded fields: {}",
            config.excluded_fields.iter().collect::<Vec<_>>().join(", ")
        ));
    }

    let local = store::load(&config.local_path)?;
    reporter.debug(format!("Loaded {} local trackers", local.trackers.len()));

    let pb = reporter.spinner("Fetching upstream trackers");
    let fetched = upstream::fetch(&config.upstream);
    finish_spinner(pb);
    let upstream = fetched?;
    reporter.debug(format!("Fetched {} upstream trackers", upstream.trackers.len()));

    let result = merge(
        RecordSet::from_records(local.trackers),
        &upstream.trackers,
        &config.excluded_fields,
    );
    if result.is_unchanged() {
        reporter.debug("Already up to date");
    }
    for change in &result.changes {
        reporter.change(change);
    }

    if dry_run {
        reporter.debug("Dry run: local file not written");
    } else {
        store::save(&config.local_path, &TrackerFile::from(result.merged.clone()))?;
        reporter.debug(format!(
            "Wrote {} trackers to {}",
            result.merged.len(),
            config.local_path.display()
        ));
    }

    Ok(result)
}

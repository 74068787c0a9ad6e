//! Final summary line printed after a sync

use crate::merge::MergeResult;

/// `Sync complete. Updated: <u>, Added: <a>`
pub fn sync_complete(result: &MergeResult) -> String {
    format!(
        "Sync complete. Updated: {}, Added: {}",
        result.updated_count(),
        result.added_count()
    )
}

/// `Dry run complete. Would update: <u>, Would add: <a>`
pub fn dry_run_complete(result: &MergeResult) -> String {
    format!(
        "Dry run complete. Would update: {}, Would add: {}",
        result.updated_count(),
        result.added_count()
    )
}

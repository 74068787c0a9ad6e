//! Upstream fetch errors

use super::SyncError;

/// Creates an upstream fetch failed error
pub fn fetch_failed(url: impl Into<String>, reason: impl Into<String>) -> SyncError {
    SyncError::UpstreamFetchFailed {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates an unexpected HTTP status error
pub fn bad_status(url: impl Into<String>, status: u16) -> SyncError {
    SyncError::UpstreamStatus {
        url: url.into(),
        status,
    }
}

//! Tracker document errors

use super::SyncError;

/// Creates a tracker parse failed error for a named source (file path or URL)
pub fn parse_failed(source_name: impl Into<String>, reason: impl Into<String>) -> SyncError {
    SyncError::TrackerParseFailed {
        source_name: source_name.into(),
        reason: reason.into(),
    }
}

/// Creates a tracker serialize failed error
pub fn serialize_failed(reason: impl Into<String>) -> SyncError {
    SyncError::TrackerSerializeFailed {
        reason: reason.into(),
    }
}

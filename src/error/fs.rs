//! File system errors

use super::SyncError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> SyncError {
    SyncError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> SyncError {
    SyncError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> SyncError {
    SyncError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

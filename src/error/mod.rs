//! Error types and handling for trackersync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped into sub-modules by error domain:
//! - [`config`]: Configuration file errors
//! - [`fs`]: File system errors
//! - [`tracker`]: Tracker document errors
//! - [`upstream`]: Upstream fetch errors

pub mod config;
pub mod fs;
pub mod tracker;
pub mod upstream;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for trackersync operations
#[derive(Error, Diagnostic, Debug)]
pub enum SyncError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(trackersync::config::not_found),
        help("Check the --config path or unset TRACKERSYNC_CONFIG")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(trackersync::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(trackersync::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(trackersync::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(trackersync::fs::not_found),
        help("Pass --local to point at your trackers.json")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(trackersync::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(trackersync::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(trackersync::fs::io_error))]
    IoError { message: String },

    // Tracker document errors
    #[error("Failed to parse tracker list from {source_name}: {reason}")]
    #[diagnostic(
        code(trackersync::tracker::parse_failed),
        help("Expected a JSON object like {{\"trackers\": [{{\"Name\": \"...\"}}]}}")
    )]
    TrackerParseFailed { source_name: String, reason: String },

    #[error("Failed to serialize tracker list: {reason}")]
    #[diagnostic(code(trackersync::tracker::serialize_failed))]
    TrackerSerializeFailed { reason: String },

    // Upstream errors
    #[error("Failed to fetch upstream {url}: {reason}")]
    #[diagnostic(
        code(trackersync::upstream::fetch_failed),
        help("Check your network connection or use --upstream-file")
    )]
    UpstreamFetchFailed { url: String, reason: String },

    #[error("Upstream {url} responded with HTTP {status}")]
    #[diagnostic(code(trackersync::upstream::bad_status))]
    UpstreamStatus { url: String, status: u16 },

    // CLI errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(trackersync::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },
}

impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SyncError {
    fn from(err: serde_yaml::Error) -> Self {
        SyncError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::TrackerParseFailed {
            source_name: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using `SyncError`
pub type Result<T> = miette::Result<T, SyncError>;

//! Fetching the upstream tracker list
//!
//! One blocking GET, no retries. A `file://` URL or an explicit file path
//! reads the document from disk instead.

use std::fs;
use std::path::PathBuf;

use crate::domain::TrackerFile;
use crate::error::Result;
use crate::error::fs::{not_found, read_failed};
use crate::error::upstream::{bad_status, fetch_failed};

/// Upstream list published by the Private Trackers Spreadsheet project
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://raw.githubusercontent.com/HDVinnie/Private-Trackers-Spreadsheet/master/trackers.json";

const USER_AGENT: &str = concat!("trackersync/", env!("CARGO_PKG_VERSION"));

/// Where the upstream document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamSource {
    Url(String),
    File(PathBuf),
}

impl UpstreamSource {
    /// Build a source from a URL, treating `file://` URLs as local paths
    pub fn from_url(url: &str) -> Self {
        match url.strip_prefix("file://") {
            Some(path) => Self::File(PathBuf::from(path)),
            None => Self::Url(url.to_string()),
        }
    }

    /// Human-readable location for messages
    pub fn describe(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

impl Default for UpstreamSource {
    fn default() -> Self {
        Self::Url(DEFAULT_UPSTREAM_URL.to_string())
    }
}

/// Fetch and parse the upstream tracker list
pub fn fetch(source: &UpstreamSource) -> Result<TrackerFile> {
    let body = match source {
        UpstreamSource::Url(url) => get(url)?,
        UpstreamSource::File(path) => {
            if !path.exists() {
                return Err(not_found(path.display().to_string()));
            }
            fs::read_to_string(path)
                .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?
        }
    };

    TrackerFile::from_json(&body, &source.describe())
}

fn get(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| fetch_failed(url, e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| fetch_failed(url, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(bad_status(url, status.as_u16()));
    }

    response.text().map_err(|e| fetch_failed(url, e.to_string()))
}

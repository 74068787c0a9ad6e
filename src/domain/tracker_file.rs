//! The `{"trackers": [...]}` document shared by the local file and upstream

use serde::{Deserialize, Serialize};

use crate::domain::{Record, RecordSet};
use crate::error::Result;
use crate::error::tracker::{parse_failed, serialize_failed};

/// Top-level tracker document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerFile {
    pub trackers: Vec<Record>,
}

impl TrackerFile {
    pub fn new(trackers: Vec<Record>) -> Self {
        Self { trackers }
    }

    /// Parse a document, naming `source_name` (a path or URL) in any error
    pub fn from_json(text: &str, source_name: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| parse_failed(source_name, e.to_string()))
    }

    /// Serialize with 2-space indentation, non-ASCII left unescaped and no
    /// trailing newline
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| serialize_failed(e.to_string()))
    }
}

impl From<RecordSet> for TrackerFile {
    /// Records come out sorted ascending by name
    fn from(set: RecordSet) -> Self {
        Self::new(set.into_records())
    }
}

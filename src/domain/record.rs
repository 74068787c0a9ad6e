//! Tracker records and name-keyed record sets

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Date used when a record carries no `Updated` field
pub const MISSING_DATE: &str = "0000-00-00";

/// Field holding the record's last-updated date (`YYYY-MM-DD`)
pub const UPDATED_FIELD: &str = "Updated";

/// A single tracker entry
///
/// `Name` is required and acts as the record's key. Every other field is kept
/// as-is in insertion order, so fields added upstream survive a round trip
/// without any schema change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Create a record with no fields besides its name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style field setter
    #[allow(dead_code)]
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The `Updated` date, or [`MISSING_DATE`] when absent or not a string
    pub fn updated(&self) -> &str {
        self.fields
            .get(UPDATED_FIELD)
            .and_then(Value::as_str)
            .unwrap_or(MISSING_DATE)
    }

    #[allow(dead_code)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Records keyed by name, iterated in ascending name order
///
/// Names compare by Unicode code point (Rust's `str` ordering).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: BTreeMap<String, Record>,
}

#[allow(dead_code)]
impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a list; a repeated name keeps the last occurrence
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut set = Self::new();
        for record in records {
            set.insert(record);
        }
        set
    }

    /// Insert a record, replacing any existing record with the same name
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name.clone(), record)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Consume the set, returning records sorted ascending by name
    pub fn into_records(self) -> Vec<Record> {
        self.records.into_values().collect()
    }
}

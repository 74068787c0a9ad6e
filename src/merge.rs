//! Merge upstream tracker records into the local set
//!
//! For each upstream record, in upstream order:
//! - unknown name: add it, minus any excluded fields
//! - known name with a strictly newer `Updated`: overlay every non-excluded
//!   upstream field onto the local record
//! - known name, same or older date: leave it alone
//!
//! Dates are compared as plain strings. `YYYY-MM-DD` sorts correctly that way;
//! anything else sorts however its characters happen to sort. Local fields are
//! never removed, and excluded fields are never written from upstream.

use crate::domain::{ExcludedFields, Record, RecordSet};

/// What happened to a single record during a merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// Existing record overlaid with newer upstream data
    Updated { from: String, to: String },
    /// Record only known upstream, now added locally
    Added,
}

/// A record touched by the merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub name: String,
    pub kind: ChangeKind,
}

/// Output of [`merge`]
#[derive(Debug, Clone)]
pub struct MergeResult {
    pub merged: RecordSet,
    /// Changes in the order upstream listed them
    pub changes: Vec<Change>,
}

impl MergeResult {
    pub fn updated_count(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c.kind, ChangeKind::Updated { .. }))
            .count()
    }

    pub fn added_count(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| c.kind == ChangeKind::Added)
            .count()
    }

    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Merge `upstream` into `local`
pub fn merge(mut local: RecordSet, upstream: &[Record], excluded: &ExcludedFields) -> MergeResult {
    let mut changes = Vec::new();

    for up in upstream {
        let up_date = up.updated();

        if let Some(mine) = local.get_mut(&up.name) {
            let local_date = mine.updated().to_string();
            if up_date > local_date.as_str() {
                overlay(mine, up, excluded);
                changes.push(Change {
                    name: up.name.clone(),
                    kind: ChangeKind::Updated {
                        from: local_date,
                        to: up_date.to_string(),
                    },
                });
            }
        } else {
            local.insert(without_excluded(up, excluded));
            changes.push(Change {
                name: up.name.clone(),
                kind: ChangeKind::Added,
            });
        }
    }

    MergeResult {
        merged: local,
        changes,
    }
}

fn overlay(target: &mut Record, source: &Record, excluded: &ExcludedFields) {
    for (key, value) in &source.fields {
        if !excluded.contains(key) {
            target.fields.insert(key.clone(), value.clone());
        }
    }
}

fn without_excluded(source: &Record, excluded: &ExcludedFields) -> Record {
    let mut record = Record::new(source.name.clone());
    overlay(&mut record, source, excluded);
    record
}

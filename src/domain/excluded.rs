//! Fields upstream is never allowed to write

use std::collections::BTreeSet;

/// Field excluded when no other set is configured
pub const DEFAULT_EXCLUDED_FIELD: &str = "Observatory Grade";

/// Set of field names that are never copied from upstream
///
/// Applies both when overlaying an existing record and when adding a new one.
/// `Name` is the record key rather than a field, so listing it has no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedFields(BTreeSet<String>);

impl ExcludedFields {
    /// An empty set: every upstream field is copied
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExcludedFields {
    fn default() -> Self {
        Self::from_iter([DEFAULT_EXCLUDED_FIELD])
    }
}

impl<S: Into<String>> FromIterator<S> for ExcludedFields {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for ExcludedFields {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

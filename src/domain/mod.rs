//! Domain models for trackersync
//!
//! Pure data types for tracker records and the documents that carry them.
//! Nothing in here performs I/O.

pub mod excluded;
pub mod record;
pub mod tracker_file;

pub use excluded::ExcludedFields;
pub use record::{Record, RecordSet};
pub use tracker_file::TrackerFile;

//! Command implementations for the trackersync CLI

pub mod completions;
pub mod sync;
pub mod version;

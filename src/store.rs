//! Local tracker file I/O
//!
//! Writes go through a temporary file in the destination directory that is
//! then renamed over the target, so readers never observe a half-written list.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::TrackerFile;
use crate::error::Result;
use crate::error::fs::{not_found, read_failed, write_failed};

/// Read and parse the local tracker file
pub fn load(path: &Path) -> Result<TrackerFile> {
    if !path.exists() {
        return Err(not_found(path.display().to_string()));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;

    TrackerFile::from_json(&content, &path.display().to_string())
}

/// Replace the local tracker file with `file`
pub fn save(path: &Path, file: &TrackerFile) -> Result<()> {
    let content = file.to_json_pretty()?;
    let display = path.display().to_string();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp =
        NamedTempFile::new_in(dir).map_err(|e| write_failed(display.clone(), e.to_string()))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| write_failed(display.clone(), e.to_string()))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| write_failed(display.clone(), e.to_string()))?;
    temp.persist(path)
        .map_err(|e| write_failed(display, e.error.to_string()))?;

    Ok(())
}

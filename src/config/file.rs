//! `trackersync.yaml` configuration file
//!
//! ```yaml
//! local_path: data/trackers.json
//! upstream_url: https://example.com/trackers.json
//! excluded_fields:
//!   - Observatory Grade
//!   - Notes
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::error::config::{invalid, not_found, parse_failed, read_failed};

/// Config file looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "trackersync.yaml";

/// Config file looked up under the user config directory
pub const USER_CONFIG_PATH: &str = "trackersync/config.yaml";

/// Parsed configuration file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub local_path: Option<PathBuf>,

    #[serde(default)]
    pub upstream_url: Option<String>,

    #[serde(default)]
    pub upstream_file: Option<PathBuf>,

    /// Replaces the built-in excluded field set when present
    #[serde(default)]
    pub excluded_fields: Option<Vec<String>>,
}

impl ConfigFile {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        // An empty file is a valid, empty configuration
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(not_found(path.display().to_string()));
        }
        let yaml = fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&yaml, path)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.upstream_url.is_some() && self.upstream_file.is_some() {
            return Err(invalid(
                "upstream_url and upstream_file are mutually exclusive",
            ));
        }
        if self.upstream_url.as_deref().is_some_and(|u| u.trim().is_empty()) {
            return Err(invalid("upstream_url cannot be empty"));
        }
        Ok(())
    }
}

/// Find the configuration file to use, if any
///
/// An explicit path must exist. Otherwise `trackersync.yaml` in `cwd` is
/// preferred over the one in `user_config_dir`.
pub fn locate(
    explicit: Option<&Path>,
    cwd: &Path,
    user_config_dir: Option<&Path>,
) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(not_found(path.display().to_string()));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(Some(local));
    }

    Ok(user_config_dir
        .map(|dir| dir.join(USER_CONFIG_PATH))
        .filter(|path| path.is_file()))
}

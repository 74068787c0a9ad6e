//! Run configuration for a sync
//!
//! Values come from, in order of precedence:
//! 1. command-line flags and their environment variables
//! 2. the `trackersync.yaml` config file (see [`file`])
//! 3. built-in defaults

pub mod file;

use std::path::{Path, PathBuf};

pub use file::ConfigFile;

use crate::domain::ExcludedFields;
use crate::error::Result;
use crate::error::config::invalid;
use crate::upstream::UpstreamSource;

/// Local tracker file used when nothing else is configured
pub const DEFAULT_LOCAL_PATH: &str = "trackers.json";

/// Settings supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub local_path: Option<PathBuf>,
    pub upstream_url: Option<String>,
    pub upstream_file: Option<PathBuf>,
    /// Added on top of the resolved excluded field set
    pub exclude: Vec<String>,
    /// Start from an empty excluded set, ignoring defaults and the config file
    pub no_default_excludes: bool,
}

/// Everything a sync run needs
#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    pub local_path: PathBuf,
    pub upstream: UpstreamSource,
    pub excluded_fields: ExcludedFields,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            local_path: PathBuf::from(DEFAULT_LOCAL_PATH),
            upstream: UpstreamSource::default(),
            excluded_fields: ExcludedFields::default(),
        }
    }
}

impl SyncConfig {
    /// Locate and load the config file, then apply overrides
    pub fn load(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let user_dir = dirs::config_dir();
        let file = match file::locate(config_path, &cwd, user_dir.as_deref())? {
            Some(path) => ConfigFile::load(&path)?,
            None => ConfigFile::default(),
        };
        Self::resolve(file, overrides)
    }

    /// Combine a parsed config file with command-line overrides
    pub fn resolve(file: ConfigFile, overrides: ConfigOverrides) -> Result<Self> {
        file.validate()?;

        let local_path = overrides
            .local_path
            .or(file.local_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCAL_PATH));

        let upstream = match (overrides.upstream_url, overrides.upstream_file) {
            (Some(_), Some(_)) => {
                return Err(invalid(
                    "--upstream-url and --upstream-file cannot be used together",
                ));
            }
            (Some(url), None) => upstream_from_url(&url)?,
            (None, Some(path)) => UpstreamSource::File(path),
            (None, None) => match (file.upstream_url, file.upstream_file) {
                (Some(url), _) => upstream_from_url(&url)?,
                (None, Some(path)) => UpstreamSource::File(path),
                (None, None) => UpstreamSource::default(),
            },
        };

        let mut excluded_fields = if overrides.no_default_excludes {
            ExcludedFields::none()
        } else {
            file.excluded_fields
                .map_or_else(ExcludedFields::default, |fields| fields.into_iter().collect())
        };
        excluded_fields.extend(overrides.exclude);

        Ok(Self {
            local_path,
            upstream,
            excluded_fields,
        })
    }
}

fn upstream_from_url(url: &str) -> Result<UpstreamSource> {
    let url = url.trim();
    if url.is_empty() {
        return Err(invalid("upstream URL cannot be empty"));
    }
    Ok(UpstreamSource::from_url(url))
}

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SlocError};

/// File looked up in the working directory when no `--config` is given.
pub const LOCAL_CONFIG_NAME: &str = ".sloc.toml";

/// Directories holding a file with this name are skipped entirely.
pub const DEFAULT_MARKER: &str = ".nosloc";

/// Settings read from `.sloc.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Emit JSON instead of the table.
    pub json: bool,
    /// Exclusion marker file name; `""` disables the marker check.
    pub marker: Option<String>,
    /// Glob patterns, relative to each root, for paths to leave out.
    pub exclude: Vec<String>,
}

impl Config {
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| SlocError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SlocError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Load `explicit` if given, else `.sloc.toml` under `dir` if it exists,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }
        let local: PathBuf = dir.join(LOCAL_CONFIG_NAME);
        if local.is_file() {
            tracing::debug!(path = %local.display(), "loading config");
            return Self::load_from_path(&local);
        }
        Ok(Self::default())
    }

    /// Effective marker name after applying the default.
    pub fn marker_name(&self) -> Option<&str> {
        match self.marker.as_deref() {
            None => Some(DEFAULT_MARKER),
            Some("") => None,
            Some(name) => Some(name),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

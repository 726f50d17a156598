use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlocError {
    #[error("{}: {source}", .path.display())]
    PathStat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source} (walking {})", .root.display())]
    DirRead {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("{}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("cannot write profile {}: {source}", .path.display())]
    ProfileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SlocError {
    /// Per-path failures are reported and skipped; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PathStat { .. } | Self::DirRead { .. } | Self::FileRead { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SlocError>;

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

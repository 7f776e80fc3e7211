//! Error types for index synchronization.
//!
//! Every variant carries the path that was being touched, so the
//! message alone is enough to find the problem on disk.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience type for functions that can fail during a sync run.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Things that can go wrong while keeping an index file up to date.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Couldn't list the target directory.
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The index file exists but couldn't be read. Non-UTF-8
    /// content ends up here too.
    #[error("failed to read index '{path}': {source}")]
    ReadIndex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Opening the index for append, or writing to it, failed.
    /// Lines written before the failure stay on disk.
    #[error("failed to write index '{path}': {source}")]
    WriteIndex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A markdown file's name isn't valid UTF-8, so no entry line
    /// can be written for it.
    #[error("file name is not valid UTF-8: '{}'", .0.display())]
    InvalidFileName(PathBuf),

    /// The config file exists but couldn't be read.
    #[error("failed to read config '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file isn't valid JSON for [`IndexConfig`](crate::IndexConfig).
    #[error("invalid config '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SyncError {
    pub fn read_index(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadIndex {
            path: path.into(),
            source,
        }
    }

    pub fn write_index(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteIndex {
            path: path.into(),
            source,
        }
    }
}

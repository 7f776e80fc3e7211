//! Index configuration.
//!
//! Defaults reproduce the hashnode backup layout. A directory can
//! override them with a `.mdindex.json` file:
//!
//! ```json
//! { "index_file_name": "README.md", "base_url": "https://example.com/posts/" }
//! ```

use crate::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Name of the index file when nothing else is configured.
pub const DEFAULT_INDEX_FILE: &str = "index.md";

/// Link prefix when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://github.com/arya2004/hashnode-backup/blob/main/";

/// Optional per-directory config file.
pub const CONFIG_FILE_NAME: &str = ".mdindex.json";

/// Where entries go and what they link to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// File name of the index inside the target directory.
    pub index_file_name: String,

    /// Prefix prepended to each file name to form its link.
    pub base_url: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            index_file_name: DEFAULT_INDEX_FILE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl IndexConfig {
    /// Loads `.mdindex.json` from `dir`, or the defaults if it's missing.
    ///
    /// Keys left out of the file keep their default values.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
                return Ok(Self::default());
            }
            Err(source) => return Err(SyncError::ConfigIo { path, source }),
        };

        let config: Self =
            serde_json::from_str(&text).map_err(|source| SyncError::Config {
                path: path.clone(),
                source,
            })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_index_file_name(mut self, name: impl Into<String>) -> Self {
        self.index_file_name = name.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Checks that the index file name names a file in the target
    /// directory itself.
    pub fn validate(&self) -> Result<()> {
        if self.index_file_name.is_empty() {
            return Err(SyncError::InvalidConfig(
                "index file name must not be empty".to_string(),
            ));
        }
        if self.index_file_name.contains(['/', '\\']) {
            return Err(SyncError::InvalidConfig(format!(
                "index file name '{}' must not contain a path separator",
                self.index_file_name
            )));
        }
        Ok(())
    }
}

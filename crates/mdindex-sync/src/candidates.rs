//! Candidate discovery.
//!
//! Lists the markdown names sitting directly in the target directory.
//! Only the name is checked, so a subdirectory called `archive.md` is
//! a candidate too; subdirectories are never descended into.

use mdindex_core::{IndexConfig, Result, SyncError};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Extension a file needs to be indexed. Matched case-sensitively.
const MARKDOWN_SUFFIX: &str = ".md";

/// Returns the names of all markdown files in `dir`, except the index.
///
/// Order is whatever the file system yields; nothing is sorted.
/// Any listing error aborts the scan, as does a markdown name that
/// isn't valid UTF-8.
pub fn list_candidates(dir: &Path, config: &IndexConfig) -> Result<Vec<String>> {
    let walker = WalkDir::new(dir).min_depth(1).max_depth(1);
    let mut names = Vec::new();

    for entry in walker {
        let entry = entry.map_err(|source| SyncError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let name = match entry.file_name().to_str() {
            Some(name) => name,
            // such a name can't be written into the index as text
            None if entry.file_name().to_string_lossy().ends_with(MARKDOWN_SUFFIX) => {
                return Err(SyncError::InvalidFileName(path.to_path_buf()));
            }
            None => {
                debug!("Ignoring non UTF-8 name: {}", path.display());
                continue;
            }
        };

        if !name.ends_with(MARKDOWN_SUFFIX) || name == config.index_file_name {
            continue;
        }

        debug!("Candidate: {}", name);
        names.push(name.to_string());
    }

    Ok(names)
}

//! Reading and appending to the index file.

use mdindex_core::{ExistingEntries, IndexEntry, Result, SyncError};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads the entry lines already recorded in the index at `path`.
///
/// A missing file counts as empty. The second value is true when the
/// file has content but no final newline, so the next append must
/// terminate that last line first.
pub fn load_existing(path: &Path) -> Result<(ExistingEntries, bool)> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No index at {}, starting empty", path.display());
            return Ok((ExistingEntries::new(), false));
        }
        Err(e) => return Err(SyncError::read_index(path, e)),
    };

    let entries =
        ExistingEntries::from_reader(text.as_bytes()).map_err(|e| SyncError::read_index(path, e))?;
    let unterminated = !text.is_empty() && !text.ends_with('\n');

    debug!("Loaded {} existing entries from {}", entries.len(), path.display());
    Ok((entries, unterminated))
}

/// Appends entry lines to an index file.
///
/// The file is opened on the first append, so a run that appends
/// nothing never creates it. Each line goes out in a single write
/// on an unbuffered handle; lines already written survive a later
/// failure.
pub struct IndexWriter {
    path: PathBuf,
    file: Option<File>,
    unterminated: bool,
}

impl IndexWriter {
    pub fn new(path: impl Into<PathBuf>, unterminated: bool) -> Self {
        Self {
            path: path.into(),
            file: None,
            unterminated,
        }
    }

    pub fn append(&mut self, entry: &IndexEntry) -> Result<()> {
        let path = &self.path;
        let file = match self.file {
            Some(ref mut file) => file,
            None => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| SyncError::write_index(path, e))?;
                self.file.insert(file)
            }
        };

        let mut buf = String::new();
        if self.unterminated {
            buf.push('\n');
        }
        buf.push_str(&entry.line());
        buf.push('\n');

        file.write_all(buf.as_bytes())
            .map_err(|e| SyncError::write_index(path, e))?;
        self.unterminated = false;

        debug!("Appended {}", entry.name);
        Ok(())
    }
}

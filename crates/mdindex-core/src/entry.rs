//! Index entry representation.
//!
//! An entry is one markdown list item linking a file name to its
//! remote copy: `- [post1.md](https://.../post1.md)`. Entries are
//! compared by their exact line text, never by file name alone, so
//! a stale line with a different URL does not count as the canonical
//! entry for that file.

use std::collections::HashSet;
use std::fmt;
use std::io::BufRead;

/// Prefix every entry line starts with. Lines without it are ignored
/// when loading an existing index.
pub const ENTRY_MARKER: &str = "- [";

/// Returns true if the line looks like an index entry.
pub fn is_entry_line(line: &str) -> bool {
    line.starts_with(ENTRY_MARKER)
}

/// The canonical entry for one markdown file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexEntry {
    /// File name as listed in the directory (e.g., "post1.md").
    pub name: String,

    /// Link target, `base_url` followed by the file name.
    pub url: String,
}

impl IndexEntry {
    /// Builds the entry for `name` under `base_url`.
    ///
    /// The URL is plain concatenation; no separator is inserted, so
    /// `base_url` should already end with `/`.
    pub fn new(name: impl Into<String>, base_url: &str) -> Self {
        let name = name.into();
        let url = format!("{}{}", base_url, name);
        Self { name, url }
    }

    /// Renders the entry as a single line without the trailing newline.
    pub fn line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for IndexEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}]({})", ENTRY_MARKER, self.name, self.url)
    }
}

/// Entry lines already present in an index file.
///
/// Membership is exact text after trailing whitespace is stripped.
#[derive(Debug, Default, Clone)]
pub struct ExistingEntries {
    lines: HashSet<String>,
}

impl ExistingEntries {
    /// Creates an empty set, as for an index file that doesn't exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every entry line from `reader`.
    ///
    /// Lines not starting with [`ENTRY_MARKER`] are skipped silently.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut entries = Self::new();
        for line in reader.lines() {
            let line = line?;
            if is_entry_line(&line) {
                entries.insert(line.trim_end());
            }
        }
        Ok(entries)
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    /// Records a line as present. Returns false if it already was.
    pub fn insert(&mut self, line: impl Into<String>) -> bool {
        self.lines.insert(line.into())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

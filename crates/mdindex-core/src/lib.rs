//! mdindex Core - index entries, configuration and errors
//!
//! This crate holds the pieces every other mdindex crate agrees on:
//! what an index line looks like, how the tool is configured, and
//! what can go wrong. It never walks directories itself.
//!
//! # Example
//!
//! ```
//! use mdindex_core::{IndexConfig, IndexEntry};
//!
//! let config = IndexConfig::default();
//! let entry = IndexEntry::new("post1.md", &config.base_url);
//! assert_eq!(
//!     entry.line(),
//!     "- [post1.md](https://github.com/arya2004/hashnode-backup/blob/main/post1.md)"
//! );
//! ```

pub mod config;
pub mod entry;
pub mod error;

pub use config::{IndexConfig, CONFIG_FILE_NAME, DEFAULT_BASE_URL, DEFAULT_INDEX_FILE};
pub use entry::{is_entry_line, ExistingEntries, IndexEntry, ENTRY_MARKER};
pub use error::{Result, SyncError};

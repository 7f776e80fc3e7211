//! mdindex Sync - index file maintenance
//!
//! This crate handles the file system side of things:
//! - Listing the markdown files in a directory
//! - Loading the entries an index file already has
//! - Appending the ones that are missing
//!
//! Existing lines are never rewritten or removed.

mod candidates;
mod index_file;
mod synchronizer;

pub use candidates::list_candidates;
pub use index_file::{load_existing, IndexWriter};
pub use synchronizer::{pending_entries, synchronize, SyncOptions, SyncReport};

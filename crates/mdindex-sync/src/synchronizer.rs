//! Index synchronization.
//!
//! Reconciles the markdown files in a directory against the entries
//! its index file already has, appending whatever is missing.

use crate::candidates::list_candidates;
use crate::index_file::{load_existing, IndexWriter};
use mdindex_core::{IndexConfig, IndexEntry, Result};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Options for a synchronize run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Work out what would be appended without touching the index.
    pub dry_run: bool,
}

/// Result of synchronizing a directory.
#[derive(Debug)]
pub struct SyncReport {
    /// Full path of the index file.
    pub index_path: PathBuf,

    /// Number of markdown files found.
    pub candidates: usize,

    /// Candidates whose canonical entry was already present.
    pub already_indexed: usize,

    /// Entries appended, in append order. For a dry run, the entries
    /// that would have been appended.
    pub appended: Vec<IndexEntry>,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Time taken in milliseconds.
    pub duration_ms: u64,
}

impl SyncReport {
    /// True when every candidate already had its entry.
    pub fn is_up_to_date(&self) -> bool {
        self.appended.is_empty()
    }
}

/// Brings the index file in `dir` up to date.
///
/// Every `.md` name in `dir` (other than the index itself) ends up
/// with a line `- [<name>](<base_url><name>)` in the index. Lines are
/// only ever appended. Whether an entry is present is decided by exact
/// line text, so a line for the same file with a different URL does
/// not count and the canonical line is appended alongside it.
///
/// Errors abort the run immediately. Entries appended before the
/// failure stay in the file.
///
/// # Example
///
/// ```no_run
/// use mdindex_core::IndexConfig;
/// use mdindex_sync::{synchronize, SyncOptions};
/// use std::path::Path;
///
/// let report = synchronize(Path::new("."), &IndexConfig::default(), SyncOptions::default()).unwrap();
/// println!("Appended {} entries", report.appended.len());
/// ```
pub fn synchronize(dir: &Path, config: &IndexConfig, options: SyncOptions) -> Result<SyncReport> {
    let start = Instant::now();
    config.validate()?;

    let index_path = dir.join(&config.index_file_name);
    info!("Synchronizing {}", index_path.display());

    let (mut existing, unterminated) = load_existing(&index_path)?;
    let candidates = list_candidates(dir, config)?;

    let mut writer = IndexWriter::new(&index_path, unterminated);
    let mut appended = Vec::new();
    let mut already_indexed = 0;

    for name in &candidates {
        let entry = IndexEntry::new(name.as_str(), &config.base_url);
        let line = entry.line();

        if existing.contains(&line) {
            debug!("Already indexed: {}", name);
            already_indexed += 1;
            continue;
        }

        if !options.dry_run {
            writer.append(&entry)?;
        }
        existing.insert(line);
        appended.push(entry);
    }

    let duration = start.elapsed();
    info!(
        "{} {} of {} files in {:?}",
        if options.dry_run { "Would append" } else { "Appended" },
        appended.len(),
        candidates.len(),
        duration
    );

    Ok(SyncReport {
        index_path,
        candidates: candidates.len(),
        already_indexed,
        appended,
        dry_run: options.dry_run,
        duration_ms: duration.as_millis() as u64,
    })
}

/// Returns the entries [`synchronize`] would append, without writing.
pub fn pending_entries(dir: &Path, config: &IndexConfig) -> Result<Vec<IndexEntry>> {
    let report = synchronize(dir, config, SyncOptions { dry_run: true })?;
    Ok(report.appended)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdindex_core::SyncError;
    use std::fs;
    use tempfile::tempdir;

    const POST1: &str = "- [post1.md](https://github.com/arya2004/hashnode-backup/blob/main/post1.md)";
    const POST2: &str = "- [post2.md](https://github.com/arya2004/hashnode-backup/blob/main/post2.md)";

    fn run(dir: &Path) -> SyncReport {
        synchronize(dir, &IndexConfig::default(), SyncOptions::default()).unwrap()
    }

    fn index_lines(dir: &Path) -> Vec<String> {
        fs::read_to_string(dir.join("index.md"))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_fresh_directory_gets_one_line_per_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("post1.md"), "# one").unwrap();
        fs::write(dir.path().join("post2.md"), "# two").unwrap();

        let report = run(dir.path());
        assert_eq!(report.candidates, 2);
        assert_eq!(report.appended.len(), 2);

        let mut lines = index_lines(dir.path());
        lines.sort();
        assert_eq!(lines, vec![POST1, POST2]);
    }

    #[test]
    fn test_prepopulated_entry_is_kept_and_not_duplicated() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.md"), format!("{}\n", POST1)).unwrap();
        fs::write(dir.path().join("post1.md"), "").unwrap();
        fs::write(dir.path().join("post2.md"), "").unwrap();

        let report = run(dir.path());
        assert_eq!(report.already_indexed, 1);
        assert_eq!(report.appended.len(), 1);
        assert_eq!(report.appended[0].name, "post2.md");

        assert_eq!(index_lines(dir.path()), vec![POST1, POST2]);
    }

    #[test]
    fn test_only_index_present_leaves_it_unchanged() {
        let dir = tempdir().unwrap();
        let original = "# My posts\n\nnothing yet\n";
        fs::write(dir.path().join("index.md"), original).unwrap();

        let report = run(dir.path());
        assert_eq!(report.candidates, 0);
        assert!(report.is_up_to_date());
        assert_eq!(
            fs::read_to_string(dir.path().join("index.md")).unwrap(),
            original
        );
    }

    #[test]
    fn test_no_candidates_creates_no_index() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        run(dir.path());
        assert!(!dir.path().join("index.md").exists());
    }

    #[test]
    fn test_url_mismatch_appends_canonical_line() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.md"), "- [post1.md](old-wrong-url)\n").unwrap();
        fs::write(dir.path().join("post1.md"), "").unwrap();

        let report = run(dir.path());
        assert_eq!(report.appended.len(), 1);
        assert_eq!(
            index_lines(dir.path()),
            vec!["- [post1.md](old-wrong-url)", POST1]
        );
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let dir = tempdir().unwrap();
        for name in ["a.md", "b.md", "c.md"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        run(dir.path());
        let after_first = fs::read_to_string(dir.path().join("index.md")).unwrap();

        let report = run(dir.path());
        assert!(report.is_up_to_date());
        assert_eq!(report.already_indexed, 3);
        assert_eq!(
            fs::read_to_string(dir.path().join("index.md")).unwrap(),
            after_first
        );
    }

    #[test]
    fn test_existing_lines_survive_in_order() {
        let dir = tempdir().unwrap();
        let before = "# Backup\n\nSome intro.\n- [gone.md](https://x/gone.md)\n";
        fs::write(dir.path().join("index.md"), before).unwrap();
        fs::write(dir.path().join("new.md"), "").unwrap();

        run(dir.path());

        let after = fs::read_to_string(dir.path().join("index.md")).unwrap();
        assert!(after.starts_with(before));
        // stale entries are never pruned
        assert!(after.contains("- [gone.md](https://x/gone.md)"));
        assert!(after.ends_with(
            "- [new.md](https://github.com/arya2004/hashnode-backup/blob/main/new.md)\n"
        ));
    }

    #[test]
    fn test_unterminated_last_line_is_not_glued() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.md"), POST1).unwrap();
        fs::write(dir.path().join("post1.md"), "").unwrap();
        fs::write(dir.path().join("post2.md"), "").unwrap();

        run(dir.path());
        assert_eq!(index_lines(dir.path()), vec![POST1, POST2]);
    }

    #[test]
    fn test_trailing_whitespace_still_matches() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.md"), format!("{}  \t\n", POST1)).unwrap();
        fs::write(dir.path().join("post1.md"), "").unwrap();

        let report = run(dir.path());
        assert!(report.is_up_to_date());
    }

    #[test]
    fn test_index_never_indexes_itself() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("post1.md"), "").unwrap();

        run(dir.path());
        run(dir.path());

        let text = fs::read_to_string(dir.path().join("index.md")).unwrap();
        assert!(!text.contains("[index.md]"));
    }

    #[test]
    fn test_md_directory_gets_an_entry() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("archive.md")).unwrap();
        fs::write(dir.path().join("post1.md"), "").unwrap();

        run(dir.path());

        let text = fs::read_to_string(dir.path().join("index.md")).unwrap();
        assert!(text.contains("[archive.md]"));
        assert!(text.contains(POST1));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_index_aborts_without_touching_it() {
        use std::fs::OpenOptions;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let index = dir.path().join("index.md");
        let before = format!("{}\n", POST2);
        fs::write(&index, &before).unwrap();
        fs::set_permissions(&index, fs::Permissions::from_mode(0o444)).unwrap();
        fs::write(dir.path().join("post1.md"), "").unwrap();

        if OpenOptions::new().append(true).open(&index).is_ok() {
            // Skip test when permissions aren't enforced (e.g., running as root)
            return;
        }

        let err = synchronize(dir.path(), &IndexConfig::default(), SyncOptions::default())
            .unwrap_err();
        assert!(matches!(err, SyncError::WriteIndex { .. }));
        assert_eq!(fs::read_to_string(&index).unwrap(), before);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("post1.md"), "").unwrap();

        let report = synchronize(
            dir.path(),
            &IndexConfig::default(),
            SyncOptions { dry_run: true },
        )
        .unwrap();
        assert!(report.dry_run);
        assert_eq!(report.appended.len(), 1);
        assert!(!dir.path().join("index.md").exists());
    }

    #[test]
    fn test_pending_entries() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.md"), format!("{}\n", POST1)).unwrap();
        fs::write(dir.path().join("post1.md"), "").unwrap();
        fs::write(dir.path().join("post2.md"), "").unwrap();

        let pending = pending_entries(dir.path(), &IndexConfig::default()).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].line(), POST2);
        assert_eq!(index_lines(dir.path()), vec![POST1]);
    }

    #[test]
    fn test_custom_config() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("post1.md"), "").unwrap();
        fs::write(dir.path().join("index.md"), "").unwrap();

        let config = IndexConfig::default()
            .with_index_file_name("README.md")
            .with_base_url("https://example.com/posts/");
        let report = synchronize(dir.path(), &config, SyncOptions::default()).unwrap();
        assert_eq!(report.appended.len(), 2);

        let mut lines: Vec<String> = fs::read_to_string(dir.path().join("README.md"))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        lines.sort();
        assert_eq!(
            lines,
            vec![
                "- [index.md](https://example.com/posts/index.md)",
                "- [post1.md](https://example.com/posts/post1.md)",
            ]
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = tempdir().unwrap();
        let config = IndexConfig::default().with_index_file_name("");

        let err = synchronize(dir.path(), &config, SyncOptions::default()).unwrap_err();
        assert!(matches!(err, SyncError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_directory_aborts() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");

        let err = synchronize(&missing, &IndexConfig::default(), SyncOptions::default())
            .unwrap_err();
        assert!(matches!(err, SyncError::ReadDir { .. }));
    }
}

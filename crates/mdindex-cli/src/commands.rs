//! CLI command implementations.

use colored::Colorize;
use mdindex_core::IndexConfig;
use mdindex_sync::{synchronize, SyncOptions, SyncReport};
use std::path::Path;
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Config overrides shared by `sync` and `check`.
#[derive(Debug, Default)]
pub struct ConfigArgs {
    pub index_file: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Default)]
pub struct SyncArgs {
    pub config: ConfigArgs,
    pub dry_run: bool,
}

#[derive(Debug, Default)]
pub struct CheckArgs {
    pub config: ConfigArgs,
}

/// Builds the effective config: flags win over `.mdindex.json`,
/// which wins over the defaults.
fn resolve_config(path: &Path, args: &ConfigArgs) -> Result<IndexConfig> {
    let mut config = IndexConfig::load(path)?;
    if let Some(ref name) = args.index_file {
        config = config.with_index_file_name(name.as_str());
    }
    if let Some(ref url) = args.base_url {
        config = config.with_base_url(url.as_str());
    }
    debug!("Using {:?}", config);
    Ok(config)
}

/// Append missing entries to the index.
pub fn sync(path: &Path, args: SyncArgs) -> Result<()> {
    let config = resolve_config(path, &args.config)?;
    let options = SyncOptions {
        dry_run: args.dry_run,
    };
    let report = synchronize(path, &config, options)?;

    print_report(&report);
    Ok(())
}

/// Report missing entries without writing. Returns false if any
/// candidate lacks its entry.
pub fn check(path: &Path, args: CheckArgs) -> Result<bool> {
    let config = resolve_config(path, &args.config)?;
    let report = synchronize(path, &config, SyncOptions { dry_run: true })?;

    if report.is_up_to_date() {
        print_report(&report);
        return Ok(true);
    }

    println!(
        "{} {} is missing {} entries:",
        "✗".red(),
        report.index_path.display(),
        report.appended.len().to_string().yellow()
    );
    for entry in &report.appended {
        println!("  {}", entry.line().dimmed());
    }
    Ok(false)
}

fn print_report(report: &SyncReport) {
    if report.is_up_to_date() {
        println!(
            "{} {} is up to date ({} files)",
            "✓".green(),
            report.index_path.display(),
            report.candidates
        );
        return;
    }

    let verb = if report.dry_run {
        "Would append"
    } else {
        "Appended"
    };
    println!(
        "{} {} {} entries to {} in {}ms",
        "✓".green(),
        verb,
        report.appended.len().to_string().cyan(),
        report.index_path.display(),
        report.duration_ms
    );
    for entry in &report.appended {
        println!("  {} {}", "+".green(), entry.line());
    }
}

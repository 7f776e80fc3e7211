//! mdindex CLI - keeps a markdown backup's index file up to date
//!
//! Run it with no arguments inside a directory of markdown files and
//! every file gets a link line in `index.md`.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "mdindex")]
#[command(author = "mdindex Contributors")]
#[command(version)]
#[command(about = "Keep an index of markdown files up to date", long_about = None)]
struct Cli {
    /// Directory holding the markdown files (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Name of the index file inside the directory
    #[arg(long, value_name = "NAME")]
    index_file: Option<String>,

    /// Prefix for each entry's link
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Show what would be appended without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Exit with an error if any entry is missing; writes nothing
    #[arg(long, conflicts_with = "dry_run")]
    check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let config = commands::ConfigArgs {
        index_file: cli.index_file,
        base_url: cli.base_url,
    };

    if cli.check {
        match commands::check(&cli.path, commands::CheckArgs { config }) {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => fail(e),
        }
        return;
    }

    let args = commands::SyncArgs {
        config,
        dry_run: cli.dry_run,
    };
    if let Err(e) = commands::sync(&cli.path, args) {
        fail(e);
    }
}

fn fail(e: Box<dyn std::error::Error>) -> ! {
    eprintln!("{} {}", "error:".red().bold(), e);
    std::process::exit(1);
}

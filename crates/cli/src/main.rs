use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use renameimage_core::{rename_directory, RenameOptions};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "renameimage", version)]
#[command(about = "Rename image files to their capture date (YYYY-MM-DD-HH-MM-SS)")]
struct Cli {
    /// Directory containing image files
    directory: PathBuf,
    /// Simulate renaming without moving files
    #[arg(long, default_value_t = false)]
    dry_run: bool,
    /// Recursively process subdirectories
    #[arg(short, long, default_value_t = false)]
    recursive: bool,
    /// Also print which timestamp each file was named after
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cmd_rename(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn cmd_rename(cli: Cli) -> Result<()> {
    let options = RenameOptions {
        root: cli.directory,
        recursive: cli.recursive,
        dry_run: cli.dry_run,
    };

    let summary = rename_directory(&options)?;

    log::debug!(
        "scanned={} images={} non_image_skip={} unreadable={} renamed={} simulated={} unchanged={} failed={}",
        summary.scan.scanned_files,
        summary.scan.image_files,
        summary.scan.skipped_non_image,
        summary.unreadable_entries,
        summary.renamed,
        summary.simulated,
        summary.unchanged,
        summary.failed
    );
    if options.dry_run {
        log::debug!("dry run: no files were changed");
    }
    Ok(())
}

//! Main entry point for the zipsweep CLI application.
//!
//! This binary sweeps a directory for `.zip` archives, extracts each
//! one in place, and removes the original archive after a successful
//! extraction.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::fs;

use zipsweep::sweep::{self, Archive};
use zipsweep::{Cli, LocalFileReader, ZipExtractor};

/// Exit code when no archives were found (nothing to do).
const EXIT_NOTHING_TO_DO: u8 = 1;
/// Exit code when extraction or a filesystem operation failed.
const EXIT_FAILURE: u8 = 2;

/// Outcome of a completed sweep.
enum Outcome {
    /// Archives were found, extracted, and removed.
    Swept,
    /// No archives matched in the target directory.
    NothingToDo,
}

/// Application entry point.
///
/// Parses command-line arguments, runs the sweep, and maps the result
/// onto the three exit states: success, nothing to do, and failure.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(Outcome::Swept) => ExitCode::SUCCESS,
        Ok(Outcome::NothingToDo) => ExitCode::from(EXIT_NOTHING_TO_DO),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Run one sweep over the target directory.
///
/// Discovers the archives up front, then processes them strictly in
/// sorted order; archive N is fully handled (extracted and deleted)
/// before archive N+1 is opened. The first failure aborts the run,
/// leaving already-swept archives extracted and the failing archive in
/// place.
async fn run(cli: &Cli) -> Result<Outcome> {
    let dir = cli.target_dir();

    let archives = sweep::discover(&dir)
        .await
        .with_context(|| format!("failed to list {}", dir.display()))?;

    if archives.is_empty() {
        if !cli.is_quiet() {
            println!("No .zip files found in {}.", dir_label(&dir));
        }
        return Ok(Outcome::NothingToDo);
    }

    for archive in &archives {
        sweep_one(archive, &dir, cli).await?;
    }

    if !cli.is_quiet() {
        println!("Finished extracting {} file(s).", archives.len());
    }

    Ok(Outcome::Swept)
}

/// Extract one archive into `dir` and delete it.
///
/// The archive is deleted only after every entry has been written out;
/// an extraction failure propagates before the deletion step, so the
/// failing archive always survives on disk. With `--keep` the deletion
/// step is skipped entirely.
async fn sweep_one(archive: &Archive, dir: &Path, cli: &Cli) -> Result<()> {
    if !cli.is_quiet() {
        println!("Extracting: {}", archive.name);
    }

    // Scope the reader so the archive handle is closed on every path
    // out of extraction before the file is unlinked; Windows refuses
    // to delete an open file.
    {
        let reader = Arc::new(
            LocalFileReader::new(&archive.path)
                .with_context(|| format!("failed to open {}", archive.name))?,
        );
        let extractor = ZipExtractor::new(reader);
        extractor
            .extract_all(dir)
            .await
            .with_context(|| format!("failed to extract {}", archive.name))?;
    }

    if !cli.is_quiet() {
        println!("Extracted contents of {}", archive.name);
    }

    if !cli.keep {
        fs::remove_file(&archive.path)
            .await
            .with_context(|| format!("failed to delete {}", archive.name))?;

        if !cli.is_quiet() {
            println!("Deleted: {}", archive.name);
        }
    }

    Ok(())
}

/// Human-readable name for the sweep target in status messages.
fn dir_label(dir: &Path) -> String {
    if dir == Path::new(".") {
        "the current directory".to_string()
    } else {
        dir.display().to_string()
    }
}

//! Archive discovery in the target directory.
//!
//! Discovery runs once at the start of a sweep: the directory is
//! listed, regular files ending in the exact `.zip` suffix are kept,
//! and the result is sorted by name so archives are processed in a
//! stable lexicographic order.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::fs;

/// Archive file name suffix, matched case-sensitively.
pub const ARCHIVE_SUFFIX: &str = ".zip";

/// One archive discovered in the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    pub path: PathBuf,
    pub name: String,
}

/// List the archives in `dir`, sorted ascending by file name.
///
/// Only regular files whose name ends in `.zip` (case-sensitive) are
/// returned. An empty result is a valid outcome, not an error.
pub async fn discover(dir: &Path) -> Result<Vec<Archive>> {
    let mut archives = Vec::new();

    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            // Non-UTF8 names cannot end in ".zip"
            Err(_) => continue,
        };

        if name.ends_with(ARCHIVE_SUFFIX) {
            archives.push(Archive {
                path: entry.path(),
                name,
            });
        }
    }

    archives.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(archives)
}

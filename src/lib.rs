//! # zipsweep
//!
//! Extract every ZIP archive in a directory and remove the originals.
//!
//! This library backs the `zipsweep` binary: it discovers `.zip` files
//! in a target directory, extracts each archive's entries into that
//! directory (preserving the relative paths stored in the archive), and
//! deletes the archive once extraction has fully succeeded.
//!
//! ## Features
//!
//! - One-shot discovery with stable lexicographic processing order
//! - Support for ZIP64 format (archives larger than 4GB)
//! - Support for STORED (uncompressed) and DEFLATE compression methods
//! - CRC-32 verification of every extracted entry
//! - Fail-fast: a corrupt archive is never deleted
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use zipsweep::{LocalFileReader, ZipExtractor};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let reader = Arc::new(LocalFileReader::new(Path::new("bundle.zip"))?);
//!     let extractor = ZipExtractor::new(reader);
//!
//!     // Unpack everything into the current directory
//!     extractor.extract_all(Path::new(".")).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod io;
pub mod sweep;
pub mod zip;

pub use cli::Cli;
pub use io::{LocalFileReader, ReadAt};
pub use zip::{ZipExtractor, ZipFileEntry};

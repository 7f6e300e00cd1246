use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::io::ReadAt;
use anyhow::{bail, Result};
use flate2::read::DeflateDecoder;
use flate2::Crc;

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipFileEntry};

/// ZIP file extractor
pub struct ZipExtractor<R: ReadAt> {
    parser: ZipParser<R>,
}

impl<R: ReadAt> ZipExtractor<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            parser: ZipParser::new(reader),
        }
    }

    /// List all entries in the archive
    pub async fn list_entries(&self) -> Result<Vec<ZipFileEntry>> {
        self.parser.list_entries().await
    }

    /// Extract every entry into `dest_dir`, preserving the relative
    /// paths stored in the archive.
    ///
    /// Directory entries are created; file entries are written with
    /// their parent directories created as needed. Existing files are
    /// overwritten. Entry paths are joined to `dest_dir` exactly as
    /// stored, with no traversal sanitization.
    pub async fn extract_all(&self, dest_dir: &Path) -> Result<()> {
        let entries = self.list_entries().await?;

        for entry in &entries {
            let output_path = dest_dir.join(&entry.file_name);

            if entry.is_directory {
                fs::create_dir_all(&output_path).await?;
            } else {
                self.extract_to_file(entry, &output_path).await?;
            }
        }

        Ok(())
    }

    /// Extract and decode one entry's data into memory.
    ///
    /// The decoded bytes are checked against the sizes and CRC-32
    /// recorded in the central directory; any mismatch fails the entry
    /// as corrupt.
    pub async fn extract_to_memory(&self, entry: &ZipFileEntry) -> Result<Vec<u8>> {
        let data_offset = self.parser.entry_data_offset(entry).await?;

        let mut compressed = vec![0u8; entry.compressed_size as usize];
        self.parser
            .reader()
            .read_at(data_offset, &mut compressed)
            .await?;

        let data = match entry.compression_method {
            CompressionMethod::Stored => compressed,
            CompressionMethod::Deflate => {
                let mut decoder = DeflateDecoder::new(&compressed[..]);
                let mut decoded = Vec::with_capacity(entry.uncompressed_size as usize);
                decoder.read_to_end(&mut decoded)?;
                decoded
            }
            CompressionMethod::Unknown(method) => {
                bail!(
                    "Unsupported compression method {} for {}",
                    method,
                    entry.file_name
                );
            }
        };

        if data.len() as u64 != entry.uncompressed_size {
            bail!(
                "Corrupt entry {}: expected {} bytes, got {}",
                entry.file_name,
                entry.uncompressed_size,
                data.len()
            );
        }

        let mut crc = Crc::new();
        crc.update(&data);
        if crc.sum() != entry.crc32 {
            bail!("Corrupt entry {}: CRC-32 mismatch", entry.file_name);
        }

        Ok(data)
    }

    /// Extract one entry to disk
    pub async fn extract_to_file(&self, entry: &ZipFileEntry, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let data = self.extract_to_memory(entry).await?;

        let mut file = fs::File::create(output_path).await?;
        file.write_all(&data).await?;

        Ok(())
    }
}

//! Minimal ZIP writer for building test fixtures.
//!
//! Produces well-formed single-disk archives with STORED or DEFLATE
//! entries and real CRC-32 values, which is all the sweeper's reader
//! side needs to be exercised against.

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::write::DeflateEncoder;
use flate2::{Compression, Crc};
use std::io::Write;
use std::path::Path;

const METHOD_STORED: u16 = 0;
const METHOD_DEFLATE: u16 = 8;

/// One entry to be placed in a fixture archive.
pub struct FixtureEntry {
    name: String,
    payload: Vec<u8>,
    crc32: u32,
    uncompressed_size: u32,
    method: u16,
}

/// A STORED (uncompressed) file entry.
pub fn stored(name: &str, data: &[u8]) -> FixtureEntry {
    FixtureEntry {
        name: name.to_string(),
        payload: data.to_vec(),
        crc32: crc32(data),
        uncompressed_size: data.len() as u32,
        method: METHOD_STORED,
    }
}

/// A DEFLATE-compressed file entry.
pub fn deflated(name: &str, data: &[u8]) -> FixtureEntry {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    let payload = encoder.finish().unwrap();

    FixtureEntry {
        name: name.to_string(),
        payload,
        crc32: crc32(data),
        uncompressed_size: data.len() as u32,
        method: METHOD_DEFLATE,
    }
}

/// A directory entry; `name` must end with `/`.
pub fn dir_entry(name: &str) -> FixtureEntry {
    assert!(name.ends_with('/'));
    FixtureEntry {
        name: name.to_string(),
        payload: Vec::new(),
        crc32: 0,
        uncompressed_size: 0,
        method: METHOD_STORED,
    }
}

/// Serialize the entries into ZIP archive bytes.
pub fn zip_bytes(entries: &[FixtureEntry]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut lfh_offsets = Vec::with_capacity(entries.len());

    // Local file headers followed by the entry data
    for entry in entries {
        lfh_offsets.push(out.len() as u32);

        out.extend_from_slice(b"PK\x03\x04");
        out.write_u16::<LittleEndian>(20).unwrap(); // version needed
        out.write_u16::<LittleEndian>(0).unwrap(); // flags
        out.write_u16::<LittleEndian>(entry.method).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap(); // mod time
        out.write_u16::<LittleEndian>(0).unwrap(); // mod date
        out.write_u32::<LittleEndian>(entry.crc32).unwrap();
        out.write_u32::<LittleEndian>(entry.payload.len() as u32)
            .unwrap();
        out.write_u32::<LittleEndian>(entry.uncompressed_size)
            .unwrap();
        out.write_u16::<LittleEndian>(entry.name.len() as u16)
            .unwrap();
        out.write_u16::<LittleEndian>(0).unwrap(); // extra field length
        out.extend_from_slice(entry.name.as_bytes());
        out.extend_from_slice(&entry.payload);
    }

    // Central directory
    let cd_offset = out.len() as u32;
    for (entry, lfh_offset) in entries.iter().zip(&lfh_offsets) {
        out.extend_from_slice(b"PK\x01\x02");
        out.write_u16::<LittleEndian>(20).unwrap(); // version made by
        out.write_u16::<LittleEndian>(20).unwrap(); // version needed
        out.write_u16::<LittleEndian>(0).unwrap(); // flags
        out.write_u16::<LittleEndian>(entry.method).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap(); // mod time
        out.write_u16::<LittleEndian>(0).unwrap(); // mod date
        out.write_u32::<LittleEndian>(entry.crc32).unwrap();
        out.write_u32::<LittleEndian>(entry.payload.len() as u32)
            .unwrap();
        out.write_u32::<LittleEndian>(entry.uncompressed_size)
            .unwrap();
        out.write_u16::<LittleEndian>(entry.name.len() as u16)
            .unwrap();
        out.write_u16::<LittleEndian>(0).unwrap(); // extra field length
        out.write_u16::<LittleEndian>(0).unwrap(); // comment length
        out.write_u16::<LittleEndian>(0).unwrap(); // disk number start
        out.write_u16::<LittleEndian>(0).unwrap(); // internal attrs
        out.write_u32::<LittleEndian>(0).unwrap(); // external attrs
        out.write_u32::<LittleEndian>(*lfh_offset).unwrap();
        out.extend_from_slice(entry.name.as_bytes());
    }
    let cd_size = out.len() as u32 - cd_offset;

    // End of central directory
    out.extend_from_slice(b"PK\x05\x06");
    out.write_u16::<LittleEndian>(0).unwrap(); // disk number
    out.write_u16::<LittleEndian>(0).unwrap(); // disk with CD
    out.write_u16::<LittleEndian>(entries.len() as u16).unwrap();
    out.write_u16::<LittleEndian>(entries.len() as u16).unwrap();
    out.write_u32::<LittleEndian>(cd_size).unwrap();
    out.write_u32::<LittleEndian>(cd_offset).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap(); // comment length

    out
}

/// Write a fixture archive to disk.
pub fn write_zip(path: &Path, entries: &[FixtureEntry]) {
    std::fs::write(path, zip_bytes(entries)).unwrap();
}

fn crc32(data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(data);
    crc.sum()
}

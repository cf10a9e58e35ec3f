//! Lenient reading of CODEOWNERS content.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Decodes bytes as UTF-8, dropping any invalid byte sequences.
pub fn decode_lenient(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0;

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }

    if dropped > 0 {
        debug!("Dropped {} undecodable byte(s)", dropped);
    }
    text
}

/// Reads a whole file and decodes it leniently.
///
/// Only I/O failures are reported; encoding problems never are.
pub fn read_lenient(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_lenient(&bytes))
}

//! BLAKE3 hashing utilities for artifacts and extension sources

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;

use crate::error::{Result, fs as fs_error};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate BLAKE3 hash of an in-memory string
pub fn hash_str(contents: &str) -> String {
    format!("{}{}", HASH_PREFIX, blake3::hash(contents.as_bytes()).to_hex())
}

/// Incremental fingerprint over a set of files and string parameters
///
/// Every entry is followed by a NUL separator so that adjacent values cannot
/// collide by concatenation.
#[derive(Default)]
pub struct Fingerprint {
    hasher: Hasher,
}

impl Fingerprint {
    /// Mix in a file's label (usually its relative path) and its contents
    pub fn add_file(&mut self, label: &str, path: &Path) -> Result<()> {
        self.hasher.update(label.as_bytes());
        self.hasher.update(b"\0");

        let file = File::open(path).map_err(|e| fs_error::read_failed(path, e))?;
        let mut reader = BufReader::new(file);
        let mut buffer = [0u8; 8192];

        loop {
            let bytes_read = reader
                .read(&mut buffer)
                .map_err(|e| fs_error::read_failed(path, e))?;

            if bytes_read == 0 {
                break;
            }

            self.hasher.update(&buffer[..bytes_read]);
        }

        self.hasher.update(b"\0");
        Ok(())
    }

    pub fn add_str(&mut self, value: &str) {
        self.hasher.update(value.as_bytes());
        self.hasher.update(b"\0");
    }

    pub fn finish(&self) -> String {
        format!("{}{}", HASH_PREFIX, self.hasher.finalize().to_hex())
    }
}

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::error::AlignError;
use crate::core::sequence::encode;
use crate::index::hash_index::HashIndex;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read or write index file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode or decode index file: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("Unsupported index file version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Index file is inconsistent: {0}")]
    Inconsistent(String),

    #[error("Index file holds an invalid reference: {0}")]
    InvalidReference(#[from] AlignError),
}

/// Index file format version for compatibility checking
pub const INDEX_FORMAT_VERSION: u32 = 1;

/// Lowercase hex MD5 of a sequence
#[must_use]
pub fn sequence_md5(sequence: &[u8]) -> String {
    format!("{:x}", md5::compute(sequence))
}

/// A prebuilt index saved alongside the reference it was built from.
///
/// The reference is kept so reports can show matched bases without the
/// input files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexFile {
    pub version: u32,
    pub reference: Vec<u8>,
    pub md5: String,
    pub index: HashIndex,
}

impl IndexFile {
    #[must_use]
    pub fn new(reference: Vec<u8>, index: HashIndex) -> Self {
        let md5 = sequence_md5(&reference);
        Self {
            version: INDEX_FORMAT_VERSION,
            reference,
            md5,
            index,
        }
    }

    /// Write the index file with bincode.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be created or
    /// `StoreError::Encoding` if serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        debug!(
            path = %path.display(),
            distinct_hashes = self.index.len(),
            "Saved index file"
        );
        Ok(())
    }

    /// Read and check an index file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io`/`StoreError::Encoding` if the file cannot be
    /// read, `StoreError::UnsupportedVersion` for a different format version,
    /// `StoreError::InvalidReference` if the stored reference is not DNA, or
    /// `StoreError::Inconsistent` if the reference and index disagree.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let reader = BufReader::new(File::open(path)?);
        let file: Self = bincode::deserialize_from(reader)?;
        file.check()?;
        Ok(file)
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.version != INDEX_FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: self.version,
                expected: INDEX_FORMAT_VERSION,
            });
        }

        for &base in &self.reference {
            encode(base)?;
        }

        if self.reference.len() != self.index.reference_len() {
            return Err(StoreError::Inconsistent(format!(
                "reference has {} bases but index was built from {}",
                self.reference.len(),
                self.index.reference_len()
            )));
        }

        if self.md5 != sequence_md5(&self.reference) {
            return Err(StoreError::Inconsistent(
                "reference MD5 does not match stored checksum".to_string(),
            ));
        }

        if !self.index.locations_in_bounds() {
            return Err(StoreError::Inconsistent(
                "index holds locations outside the reference".to_string(),
            ));
        }

        Ok(())
    }
}

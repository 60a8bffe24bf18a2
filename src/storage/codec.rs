//! Encoding and decoding of persisted address books.
//!
//! Two formats share one schema, a version tag plus the records in insertion
//! order:
//!
//! - **Binary**: the 4-byte magic `CBK\0`, the schema version as a
//!   little-endian `u16`, then the `bitcode` encoding of the records.
//! - **JSON**: a pretty-printed `{"version": 1, "records": [...]}` document.
//!
//! Every field is re-validated while decoding, so a tampered file cannot
//! produce an invalid record.

use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Leading bytes of a binary address book file.
pub const MAGIC: &[u8; 4] = b"CBK\0";

/// Schema version written by this build.
pub const FORMAT_VERSION: u16 = 1;

const HEADER_LEN: usize = MAGIC.len() + 2;

/// On-disk representation of an address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageFormat {
    /// Compact `bitcode` payload behind a magic header
    #[default]
    Binary,
    /// Human-readable JSON
    Json,
}

impl StorageFormat {
    /// Pick a format from a file extension: `.json` is JSON, anything else binary.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Binary,
        }
    }
}

impl FromStr for StorageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(Self::Binary),
            "json" => Ok(Self::Json),
            other => Err(format!("Must be 'binary' or 'json', got: {}", other)),
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
struct StoredBookRef<'a> {
    version: u16,
    records: &'a [Record],
}

#[derive(Deserialize)]
struct StoredBook {
    version: u16,
    records: Vec<Record>,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u16,
}

/// Encode records in the given format.
pub fn encode(records: &[Record], format: StorageFormat) -> StorageResult<Vec<u8>> {
    match format {
        StorageFormat::Binary => {
            let payload =
                bitcode::serialize(&records).map_err(|e| StorageError::Encode(e.to_string()))?;
            let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
            bytes.extend_from_slice(MAGIC);
            bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
            bytes.extend_from_slice(&payload);
            Ok(bytes)
        }
        StorageFormat::Json => {
            let stored = StoredBookRef {
                version: FORMAT_VERSION,
                records,
            };
            Ok(serde_json::to_vec_pretty(&stored)?)
        }
    }
}

/// Decode records written by [`encode`] in the given format.
///
/// # Errors
///
/// Fails on a missing header, an unknown version, a malformed payload, an
/// invalid field value or two records with the same name.
pub fn decode(bytes: &[u8], format: StorageFormat) -> StorageResult<Vec<Record>> {
    let records = match format {
        StorageFormat::Binary => decode_binary(bytes)?,
        StorageFormat::Json => decode_json(bytes)?,
    };
    ensure_unique_names(&records)?;
    Ok(records)
}

fn decode_binary(bytes: &[u8]) -> StorageResult<Vec<Record>> {
    if bytes.len() < HEADER_LEN || &bytes[..MAGIC.len()] != MAGIC {
        return Err(StorageError::BadMagic);
    }
    let version = u16::from_le_bytes([bytes[MAGIC.len()], bytes[MAGIC.len() + 1]]);
    check_version(version)?;
    bitcode::deserialize(&bytes[HEADER_LEN..]).map_err(|e| StorageError::Decode(e.to_string()))
}

fn decode_json(bytes: &[u8]) -> StorageResult<Vec<Record>> {
    let probe: VersionProbe = serde_json::from_slice(bytes)?;
    check_version(probe.version)?;
    let stored: StoredBook = serde_json::from_slice(bytes)?;
    Ok(stored.records)
}

fn check_version(version: u16) -> StorageResult<()> {
    if version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion(version));
    }
    Ok(())
}

fn ensure_unique_names(records: &[Record]) -> StorageResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.name()) {
            return Err(StorageError::DuplicateRecord(record.name().to_string()));
        }
    }
    Ok(())
}

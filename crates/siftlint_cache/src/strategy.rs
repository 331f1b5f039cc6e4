//! Cache invalidation strategies.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::CacheError;

/// Computes the BLAKE3 hash of content.
pub fn hash_content(content: &str) -> String {
    blake3::hash(content.as_bytes()).to_hex().to_string()
}

/// How cached entries are invalidated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Key on modified time + byte size. Cheap; a rewrite preserving both
    /// goes undetected.
    #[default]
    Metadata,
    /// Key on a BLAKE3 hash of the file content.
    Content,
}

impl Strategy {
    /// Computes the key identifying the file's current state.
    ///
    /// The metadata strategy reads filesystem metadata for `path`; the
    /// content strategy hashes `content` (already read by the caller).
    pub fn file_key(&self, path: &Path, content: &str) -> Result<FileKey, CacheError> {
        match self {
            Strategy::Metadata => {
                let meta = fs::metadata(path)?;
                let modified_ms = meta
                    .modified()?
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_millis() as u64)
                    .unwrap_or(0);
                Ok(FileKey::Metadata {
                    modified_ms,
                    size: meta.len(),
                })
            }
            Strategy::Content => Ok(FileKey::Content {
                hash: hash_content(content),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Metadata => "metadata",
            Strategy::Content => "content",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Error)]
#[error("Unknown cache strategy '{0}' (expected 'metadata' or 'content')")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metadata" => Ok(Strategy::Metadata),
            "content" => Ok(Strategy::Content),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

/// Identity of one file's cached state.
///
/// Keys produced by different strategies never compare equal, so a store
/// probed under the wrong strategy misses on every entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub enum FileKey {
    Metadata { modified_ms: u64, size: u64 },
    Content { hash: String },
}

impl FileKey {
    /// The strategy this key was computed under.
    pub fn strategy(&self) -> Strategy {
        match self {
            FileKey::Metadata { .. } => Strategy::Metadata,
            FileKey::Content { .. } => Strategy::Content,
        }
    }
}

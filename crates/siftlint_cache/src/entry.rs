//! Cache entry types.

use serde::{Deserialize, Serialize};
use siftlint_engine::Finding;

use crate::FileKey;

/// A cache entry for a single file: its identity key at lint time and the
/// findings the engine produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct CacheEntry {
    /// Identity of the file state these findings belong to.
    pub key: FileKey,

    /// Cached findings, in document order.
    pub findings: Vec<Finding>,
}

impl CacheEntry {
    /// Creates a new cache entry.
    pub fn new(key: FileKey, findings: Vec<Finding>) -> Self {
        Self { key, findings }
    }

    /// Checks whether this entry is still valid for the file's current key.
    pub fn is_valid(&self, current: &FileKey) -> bool {
        self.key == *current
    }
}

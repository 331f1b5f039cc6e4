//! Persistent cache store.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::{CacheEntry, CacheError, FileKey, Strategy};

/// The keyed collection of cache entries, addressed by project-relative
/// file path.
///
/// The strategy the entries were keyed under is part of the persisted state:
/// loading a store written under a different strategy yields an empty store,
/// so every entry misses (full invalidation, not an error).
#[derive(Debug)]
#[derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct CacheStore {
    strategy: Strategy,
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    /// Creates an empty store for the given strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            entries: HashMap::new(),
        }
    }

    /// Loads a store from disk.
    ///
    /// Fails soft: a missing, unreadable, corrupt, or strategy-mismatched
    /// store is treated as empty. First runs and recovery from corruption
    /// both succeed silently.
    pub fn load(path: &Path, strategy: Strategy) -> Self {
        if !path.exists() {
            debug!("No cache store found at {}", path.display());
            return Self::new(strategy);
        }

        match Self::read(path) {
            Ok(store) if store.strategy == strategy => {
                info!("Loaded {} cache entries", store.entries.len());
                store
            }
            Ok(store) => {
                debug!(
                    "Cache store at {} was written under the '{}' strategy, discarding",
                    path.display(),
                    store.strategy
                );
                Self::new(strategy)
            }
            Err(e) => {
                warn!("Discarding unreadable cache store {}: {}", path.display(), e);
                Self::new(strategy)
            }
        }
    }

    fn read(path: &Path) -> Result<Self, CacheError> {
        let bytes = fs::read(path)?;
        rkyv::from_bytes::<Self, rkyv::rancor::Error>(&bytes)
            .map_err(|e| CacheError::corrupted(e.to_string()))
    }

    /// Looks up an entry; a hit requires the stored key to equal `current`.
    pub fn lookup(&self, path_key: &str, current: &FileKey) -> Option<&CacheEntry> {
        self.entries
            .get(path_key)
            .filter(|entry| entry.is_valid(current))
    }

    /// Inserts or replaces the entry for a path. Other entries are untouched.
    pub fn update(&mut self, path_key: String, entry: CacheEntry) {
        self.entries.insert(path_key, entry);
    }

    /// Removes an entry.
    pub fn remove(&mut self, path_key: &str) -> Option<CacheEntry> {
        self.entries.remove(path_key)
    }

    /// Drops entries for paths not in `keep`. Returns how many were pruned.
    pub fn retain_paths(&mut self, keep: &HashSet<String>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|path, _| keep.contains(path));
        before - self.entries.len()
    }

    /// Durably persists the store.
    ///
    /// Writes to a temporary file next to the target and renames it into
    /// place, so a crash mid-write never leaves a torn store.
    pub fn flush(&self, path: &Path) -> Result<(), CacheError> {
        let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(self)
            .map_err(|e| CacheError::Serialization(e.to_string()))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "store".to_string());
        let tmp = path.with_file_name(format!("{file_name}.tmp"));

        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;

        Ok(())
    }

    /// The strategy this store's entries are keyed under.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

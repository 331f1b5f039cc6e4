//! Cache manager tying location, strategy, and store together.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use siftlint_engine::Finding;
use tracing::{debug, info, warn};

use crate::{CacheEntry, CacheError, CacheLocation, CacheStore, FileKey, Strategy};

/// Manages the lint result cache for one run.
///
/// One run owns one manager for its duration; callers serialize access
/// (the orchestrator keeps it behind a `Mutex`).
pub struct CacheManager {
    /// Resolved store location for this run.
    location: CacheLocation,
    /// Store artifact at the default location, when this run writes
    /// somewhere else. Removed after a successful flush so relocation
    /// never leaves two live stores.
    stale_default: Option<PathBuf>,
    /// Active invalidation strategy.
    strategy: Strategy,
    /// In-memory entries.
    store: CacheStore,
    /// Whether caching is enabled.
    enabled: bool,
}

impl CacheManager {
    /// Creates a new cache manager.
    ///
    /// `default_location` is where the store would live without overrides;
    /// it is tracked so relocating the cache cleans up the old artifact.
    pub fn new(location: CacheLocation, default_location: &CacheLocation, strategy: Strategy) -> Self {
        let stale_default = (default_location.store_path() != location.store_path())
            .then(|| default_location.store_path());

        Self {
            location,
            stale_default,
            strategy,
            store: CacheStore::new(strategy),
            enabled: true,
        }
    }

    /// Disables caching: every lookup misses, updates are dropped, and no
    /// store is read from disk.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Enables caching.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Returns whether caching is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The active invalidation strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Path of the store artifact at the resolved location.
    pub fn store_path(&self) -> PathBuf {
        self.location.store_path()
    }

    /// Loads the store from disk.
    ///
    /// Creates the resolved location if missing (fatal when unwritable);
    /// a missing or corrupt store itself is never an error.
    pub fn load(&mut self) -> Result<(), CacheError> {
        if !self.enabled {
            return Ok(());
        }

        self.location.ensure_exists()?;
        self.store = CacheStore::load(&self.location.store_path(), self.strategy);
        Ok(())
    }

    /// Returns the cached findings for a file if its entry is still valid.
    pub fn lookup(&self, path: &Path, key: &FileKey) -> Option<Vec<Finding>> {
        if !self.enabled {
            return None;
        }

        self.store
            .lookup(&Self::path_key(path), key)
            .map(|entry| entry.findings.clone())
    }

    /// Stores a file's findings under its current key.
    pub fn update(&mut self, path: &Path, key: FileKey, findings: Vec<Finding>) {
        if self.enabled {
            self.store
                .update(Self::path_key(path), CacheEntry::new(key, findings));
        }
    }

    /// Persists the current state.
    ///
    /// `project_files` is the full set of path keys the run considered when
    /// it covered the whole project; entries for paths no longer present are
    /// pruned. Pass `None` for a run over an explicit subset, which must
    /// leave other files' entries untouched.
    ///
    /// When caching is disabled this removes any existing store artifact at
    /// the resolved location instead of leaving a stale one behind.
    pub fn flush(&mut self, project_files: Option<&HashSet<String>>) -> Result<(), CacheError> {
        let store_path = self.location.store_path();

        if !self.enabled {
            remove_artifact(&store_path);
            return Ok(());
        }

        if let Some(keep) = project_files {
            let pruned = self.store.retain_paths(keep);
            if pruned > 0 {
                debug!("Pruned {} cache entries for absent files", pruned);
            }
        }

        self.location.ensure_exists()?;
        self.store.flush(&store_path)?;

        if let Some(stale) = self.stale_default.take() {
            remove_artifact(&stale);
        }

        info!(
            "Saved {} cache entries to {}",
            self.store.len(),
            store_path.display()
        );

        Ok(())
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Store key for a path.
    pub fn path_key(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }
}

/// Removes a store artifact, tolerating its absence.
fn remove_artifact(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!("Removed cache store at {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove cache store {}: {}", path.display(), e),
    }
}

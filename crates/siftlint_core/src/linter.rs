//! Core lint orchestration.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rayon::prelude::*;
use tracing::{debug, warn};

use siftlint_cache::{CacheLocation, CacheManager, Strategy};
use siftlint_engine::LintEngine;

use crate::{FileFinder, LintResult, LinterConfig, LinterError};

/// Result type for lint runs.
///
/// Contains a tuple of:
/// - Successful lint results
/// - Failed files with their errors (path and error)
pub type LintFilesResult = Result<(Vec<LintResult>, Vec<(PathBuf, LinterError)>), LinterError>;

/// The lint orchestrator.
///
/// Partitions the requested file set into cache hits and misses, dispatches
/// misses to the engine in parallel, and merges results in file order. The
/// cache is flushed once, after all files complete, so an interrupted run
/// never persists partial state.
pub struct Linter {
    /// Lint engine invoked on cache misses.
    engine: Box<dyn LintEngine>,
    /// Cache manager; all lookups and updates serialize through this lock.
    cache: Mutex<CacheManager>,
    /// Active invalidation strategy.
    strategy: Strategy,
    /// File discovery and filtering.
    file_finder: FileFinder,
    /// Project root all paths are relative to.
    base_dir: PathBuf,
}

impl Linter {
    /// Creates a new linter with the given configuration and engine.
    ///
    /// Loads the cache store from its resolved location; an unwritable
    /// location is a fatal error, a missing or corrupt store is not.
    pub fn new(config: LinterConfig, engine: Box<dyn LintEngine>) -> Result<Self, LinterError> {
        let base_dir = config
            .base_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let output_dir = base_dir.join(&config.output_dir);
        let default_location = CacheLocation::default_for(&output_dir);
        let location = CacheLocation::resolve(
            config.cache_location().as_deref(),
            config.cache_dir().as_deref(),
            &output_dir,
        );

        let strategy = config.cache_strategy();
        let mut cache = CacheManager::new(location, &default_location, strategy);
        if !config.cache_enabled() {
            cache.disable();
        }
        cache.load()?;

        // The build output directory is never a lint candidate
        let mut exclude = config.exclude.clone();
        exclude.push(format!("{}/**", config.output_dir));
        let file_finder = FileFinder::new(&config.include, &exclude)?;

        Ok(Self {
            engine,
            cache: Mutex::new(cache),
            strategy,
            file_finder,
            base_dir,
        })
    }

    /// Lints all project files.
    ///
    /// Returns a tuple of (successful results, failed files with errors).
    pub fn lint_project(&self) -> LintFilesResult {
        let files = self.file_finder.discover_project(&self.base_dir)?;
        self.run(&files, true)
    }

    /// Lints an explicit subset of files.
    ///
    /// Cache entries for files outside the subset are left untouched.
    pub fn lint_files(&self, paths: &[PathBuf]) -> LintFilesResult {
        let selected = self.file_finder.select(paths);
        let files: Vec<PathBuf> = selected
            .iter()
            .map(|path| self.relative(path).to_path_buf())
            .collect();
        self.run(&files, false)
    }

    fn run(&self, files: &[PathBuf], full_run: bool) -> LintFilesResult {
        let results: Vec<Result<LintResult, (PathBuf, LinterError)>> = files
            .par_iter()
            .map(|path| self.lint_one(path).map_err(|e| (path.clone(), e)))
            .collect();

        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(lint_result) => successes.push(lint_result),
                Err((path, error)) => {
                    warn!("Failed to lint {}: {}", path.display(), error);
                    failures.push((path, error));
                }
            }
        }

        // Prune only when the whole project was considered; subset runs must
        // leave other files' entries alone. Failed files stay in the keep set
        // so their prior entries survive.
        let seen: Option<HashSet<String>> = full_run.then(|| {
            files
                .iter()
                .map(|path| CacheManager::path_key(path))
                .collect()
        });

        // Save cache (handle mutex poison gracefully)
        match self.cache.lock() {
            Ok(mut cache) => {
                if let Err(e) = cache.flush(seen.as_ref()) {
                    warn!("Failed to save cache: {}", e);
                }
            }
            Err(poison) => {
                warn!("Cache mutex poisoned, attempting recovery: {}", poison);
                if let Err(e) = poison.into_inner().flush(seen.as_ref()) {
                    warn!("Failed to save cache after recovery: {}", e);
                }
            }
        }

        Ok((successes, failures))
    }

    /// Lints a single file, consulting the cache first.
    fn lint_one(&self, path: &Path) -> Result<LintResult, LinterError> {
        debug!("Linting {}", path.display());

        let full_path = self.absolute(path);
        let content = fs::read_to_string(&full_path).map_err(|e| {
            LinterError::file(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let key = self.strategy.file_key(&full_path, &content)?;

        {
            let cache = self
                .cache
                .lock()
                .map_err(|_| LinterError::Internal("Cache mutex poisoned".to_string()))?;
            if let Some(findings) = cache.lookup(path, &key) {
                debug!("Using cached result for {}", path.display());
                return Ok(LintResult::cached(path.to_path_buf(), findings));
            }
        }

        let findings = self.engine.lint(path, &content)?;

        {
            let mut cache = self
                .cache
                .lock()
                .map_err(|_| LinterError::Internal("Cache mutex poisoned".to_string()))?;
            cache.update(path, key, findings.clone());
        }

        Ok(LintResult::new(path.to_path_buf(), findings))
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.base_dir).unwrap_or(path)
    }
}

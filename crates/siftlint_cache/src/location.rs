//! Cache location resolution.

use std::fs;
use std::path::{Path, PathBuf};

use crate::CacheError;

/// File name of the store inside a cache directory.
pub const STORE_FILE_NAME: &str = "store.rkyv";

/// Where the persisted store lives.
///
/// The two layouts are mutually exclusive: either a directory that holds the
/// store file, or an explicit single-file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLocation {
    Directory(PathBuf),
    File(PathBuf),
}

impl CacheLocation {
    /// Resolves the cache location from configuration.
    ///
    /// Precedence: explicit single-file override, then explicit directory
    /// override, then the default derived from the build output directory.
    pub fn resolve(
        file_override: Option<&Path>,
        dir_override: Option<&Path>,
        output_dir: &Path,
    ) -> Self {
        if let Some(file) = file_override {
            return Self::File(file.to_path_buf());
        }
        if let Some(dir) = dir_override {
            return Self::Directory(dir.to_path_buf());
        }
        Self::default_for(output_dir)
    }

    /// The default location under a build output directory.
    pub fn default_for(output_dir: &Path) -> Self {
        Self::Directory(output_dir.join("cache").join("lint"))
    }

    /// Path of the store artifact at this location.
    pub fn store_path(&self) -> PathBuf {
        match self {
            Self::Directory(dir) => dir.join(STORE_FILE_NAME),
            Self::File(file) => file.clone(),
        }
    }

    /// Creates the directory (or a file override's parent) if missing.
    ///
    /// An unwritable location is a fatal error for the caller.
    pub fn ensure_exists(&self) -> Result<(), CacheError> {
        let dir = match self {
            Self::Directory(dir) => Some(dir.as_path()),
            Self::File(file) => file.parent(),
        };

        if let Some(dir) = dir
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        Ok(())
    }
}

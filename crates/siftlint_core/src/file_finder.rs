//! File discovery and filtering.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::LinterError;

/// Discovers and filters candidate files.
pub struct FileFinder {
    include_globs: Option<GlobSet>,
    exclude_globs: Option<GlobSet>,
}

impl FileFinder {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, LinterError> {
        let include_globs = Self::build_globset(include)?;
        let exclude_globs = Self::build_globset(exclude)?;

        Ok(Self {
            include_globs,
            exclude_globs,
        })
    }

    fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, LinterError> {
        if patterns.is_empty() {
            return Ok(None);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .map_err(|e| LinterError::config(format!("Invalid glob pattern: {}", e)))?;
            builder.add(glob);
        }

        let globset = builder
            .build()
            .map_err(|e| LinterError::config(format!("Failed to build globset: {}", e)))?;

        Ok(Some(globset))
    }

    /// Checks if a path should be ignored based on include/exclude patterns.
    pub fn should_ignore(&self, path: &Path) -> bool {
        if self
            .exclude_globs
            .as_ref()
            .is_some_and(|excludes| excludes.is_match(path))
        {
            return true;
        }

        if self
            .include_globs
            .as_ref()
            .is_some_and(|includes| !includes.is_match(path))
        {
            return true;
        }

        false
    }

    /// Walks the project tree and returns all candidate files.
    ///
    /// Hidden files and directories are skipped; include/exclude patterns
    /// are matched against paths relative to `base_dir`.
    pub fn discover_project(&self, base_dir: &Path) -> Result<Vec<PathBuf>, LinterError> {
        let mut files = Vec::new();

        let walker = WalkDir::new(base_dir)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        for entry in walker.filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(base_dir).unwrap_or(path);
            if self.should_ignore(relative) {
                continue;
            }

            files.push(relative.to_path_buf());
        }

        files.sort();
        files.dedup();

        info!("Discovered {} files to lint", files.len());
        Ok(files)
    }

    /// Resolves an explicit file selection.
    ///
    /// Missing paths are skipped with a warning; excluded paths are skipped
    /// silently.
    pub fn select(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in paths {
            if !path.is_file() {
                warn!("{} is not a file, skipping", path.display());
                continue;
            }

            if self.should_ignore(path) {
                debug!("{} matches an ignore pattern, skipping", path.display());
                continue;
            }

            files.push(path.clone());
        }

        files.sort();
        files.dedup();
        files
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.') && name.len() > 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_build_globset() {
        let patterns = vec!["**/*.md".to_string(), "*.txt".to_string()];
        let result = FileFinder::build_globset(&patterns);
        assert!(result.is_ok());
        assert!(result.unwrap().is_some());
    }

    #[test]
    fn test_build_globset_empty() {
        let result = FileFinder::build_globset(&[]);
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_build_globset_invalid_pattern() {
        let patterns = vec!["[invalid".to_string()];
        assert!(FileFinder::build_globset(&patterns).is_err());
    }

    #[test]
    fn test_discover_respects_exclude() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("test.md"), "# Test").unwrap();
        fs::create_dir(temp.path().join("vendor")).unwrap();
        fs::write(temp.path().join("vendor/excluded.md"), "# Excluded").unwrap();

        let finder = FileFinder::new(&[], &["vendor/**".to_string()]).unwrap();
        let files = finder.discover_project(temp.path()).unwrap();

        assert_eq!(files, vec![PathBuf::from("test.md")]);
    }

    #[test]
    fn test_discover_respects_include() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("test.md"), "# Test").unwrap();
        fs::write(temp.path().join("test.txt"), "Test").unwrap();

        let finder = FileFinder::new(&["**/*.md".to_string()], &[]).unwrap();
        let files = finder.discover_project(temp.path()).unwrap();

        assert_eq!(files, vec![PathBuf::from("test.md")]);
    }

    #[test]
    fn test_discover_skips_hidden_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("visible.txt"), "ok").unwrap();
        fs::write(temp.path().join(".hidden.txt"), "hidden").unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        fs::write(temp.path().join(".git/config"), "noise").unwrap();

        let finder = FileFinder::new(&[], &[]).unwrap();
        let files = finder.discover_project(temp.path()).unwrap();

        assert_eq!(files, vec![PathBuf::from("visible.txt")]);
    }

    #[test]
    fn test_discover_returns_sorted_relative_paths() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::write(temp.path().join("sub/c.txt"), "c").unwrap();

        let finder = FileFinder::new(&[], &[]).unwrap();
        let files = finder.discover_project(temp.path()).unwrap();

        assert_eq!(
            files,
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("b.txt"),
                PathBuf::from("sub/c.txt"),
            ]
        );
    }

    #[test]
    fn test_select_skips_missing_files() {
        let temp = tempdir().unwrap();
        let existing = temp.path().join("a.txt");
        fs::write(&existing, "a").unwrap();

        let finder = FileFinder::new(&[], &[]).unwrap();
        let files = finder.select(&[existing.clone(), temp.path().join("missing.txt")]);

        assert_eq!(files, vec![existing]);
    }

    #[test]
    fn test_select_applies_exclude_patterns() {
        let temp = tempdir().unwrap();
        let excluded = temp.path().join("skip.txt");
        fs::write(&excluded, "x").unwrap();

        let finder = FileFinder::new(&[], &["**/skip.txt".to_string()]).unwrap();
        let files = finder.select(&[excluded]);

        assert!(files.is_empty());
    }

    #[test]
    fn test_select_deduplicates() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "a").unwrap();

        let finder = FileFinder::new(&[], &[]).unwrap();
        let files = finder.select(&[file.clone(), file.clone()]);

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_exclude_takes_priority_over_include() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        fs::create_dir_all(temp.path().join("vendor/docs")).unwrap();
        fs::write(temp.path().join("docs/readme.md"), "# Readme").unwrap();
        fs::write(temp.path().join("vendor/docs/internal.md"), "# Internal").unwrap();

        let finder =
            FileFinder::new(&["**/*.md".to_string()], &["vendor/**".to_string()]).unwrap();
        let files = finder.discover_project(temp.path()).unwrap();

        assert_eq!(files, vec![PathBuf::from("docs/readme.md")]);
    }
}

//! Linter configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use siftlint_cache::Strategy;

use crate::LinterError;

/// Configuration for the linter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinterConfig {
    /// File patterns to include.
    #[serde(default)]
    pub include: Vec<String>,

    /// File patterns to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Build output directory; the default cache location derives from it.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Cache configuration.
    #[serde(default = "default_cache")]
    pub cache: CacheConfig,

    /// Base directory for resolving relative paths.
    /// This is usually the directory containing the configuration file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_output_dir() -> String {
    "build".to_string()
}

fn default_cache() -> CacheConfig {
    CacheConfig::Boolean(true)
}

/// Cache configuration: a bare on/off boolean or a detail object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CacheConfig {
    Boolean(bool),
    Detail(CacheConfigDetail),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfigDetail {
    /// Whether caching is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Cache directory override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    /// Single-file cache location override. Takes precedence over `dir`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Invalidation strategy.
    #[serde(default)]
    pub strategy: Strategy,
}

fn default_enabled() -> bool {
    true
}

impl Default for CacheConfigDetail {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
            location: None,
            strategy: Strategy::default(),
        }
    }
}

impl LinterConfig {
    /// Config file names probed by `discover`, in order.
    pub const CONFIG_FILES: [&'static str; 2] = [".siftlint.json", "siftlint.config.json"];

    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            output_dir: default_output_dir(),
            cache: default_cache(),
            base_dir: None,
        }
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LinterError::config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;

        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }

        Ok(config)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LinterError> {
        serde_json::from_str(json)
            .map_err(|e| LinterError::config(format!("Invalid config: {}", e)))
    }

    /// Finds a config file in the given directory.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Returns whether caching is enabled.
    pub fn cache_enabled(&self) -> bool {
        match &self.cache {
            CacheConfig::Boolean(enabled) => *enabled,
            CacheConfig::Detail(detail) => detail.enabled,
        }
    }

    /// Cache directory override, if configured.
    pub fn cache_dir(&self) -> Option<PathBuf> {
        match &self.cache {
            CacheConfig::Boolean(_) => None,
            CacheConfig::Detail(detail) => detail.dir.as_ref().map(PathBuf::from),
        }
    }

    /// Single-file cache location override, if configured.
    pub fn cache_location(&self) -> Option<PathBuf> {
        match &self.cache {
            CacheConfig::Boolean(_) => None,
            CacheConfig::Detail(detail) => detail.location.as_ref().map(PathBuf::from),
        }
    }

    /// The configured invalidation strategy.
    pub fn cache_strategy(&self) -> Strategy {
        match &self.cache {
            CacheConfig::Boolean(_) => Strategy::default(),
            CacheConfig::Detail(detail) => detail.strategy,
        }
    }

    /// Mutable access to the cache detail, promoting a bare boolean first.
    pub fn cache_detail_mut(&mut self) -> &mut CacheConfigDetail {
        if let CacheConfig::Boolean(enabled) = self.cache {
            self.cache = CacheConfig::Detail(CacheConfigDetail {
                enabled,
                ..CacheConfigDetail::default()
            });
        }

        match &mut self.cache {
            CacheConfig::Detail(detail) => detail,
            CacheConfig::Boolean(_) => unreachable!("promoted above"),
        }
    }
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_new() {
        let config = LinterConfig::new();
        assert!(config.include.is_empty());
        assert!(config.exclude.is_empty());
        assert_eq!(config.output_dir, "build");
        assert!(config.cache_enabled());
        assert_eq!(config.cache_strategy(), Strategy::Metadata);
    }

    #[test]
    fn test_config_from_json_defaults() {
        let config = LinterConfig::from_json("{}").unwrap();
        assert!(config.cache_enabled());
        assert!(config.cache_dir().is_none());
        assert!(config.cache_location().is_none());
    }

    #[test]
    fn test_config_cache_boolean() {
        let config = LinterConfig::from_json(r#"{ "cache": false }"#).unwrap();
        assert!(!config.cache_enabled());
    }

    #[test]
    fn test_config_cache_detail() {
        let json = r#"{
            "cache": {
                "dir": "/tmp/lint-cache",
                "strategy": "content"
            }
        }"#;

        let config = LinterConfig::from_json(json).unwrap();
        assert!(config.cache_enabled());
        assert_eq!(config.cache_dir(), Some(PathBuf::from("/tmp/lint-cache")));
        assert_eq!(config.cache_strategy(), Strategy::Content);
    }

    #[test]
    fn test_config_cache_detail_disabled() {
        let json = r#"{ "cache": { "enabled": false } }"#;
        let config = LinterConfig::from_json(json).unwrap();
        assert!(!config.cache_enabled());
    }

    #[test]
    fn test_config_cache_location() {
        let json = r#"{ "cache": { "location": ".lint-results.bin" } }"#;
        let config = LinterConfig::from_json(json).unwrap();
        assert_eq!(
            config.cache_location(),
            Some(PathBuf::from(".lint-results.bin"))
        );
    }

    #[test]
    fn test_config_from_json_invalid() {
        assert!(LinterConfig::from_json("{ invalid json }").is_err());
    }

    #[test]
    fn test_config_from_json_include_exclude() {
        let json = r#"{
            "include": ["**/*.md"],
            "exclude": ["**/node_modules/**"]
        }"#;

        let config = LinterConfig::from_json(json).unwrap();
        assert_eq!(config.include, vec!["**/*.md"]);
        assert_eq!(config.exclude, vec!["**/node_modules/**"]);
    }

    #[test]
    fn test_cache_detail_mut_promotes_boolean() {
        let mut config = LinterConfig::from_json(r#"{ "cache": false }"#).unwrap();

        config.cache_detail_mut().dir = Some("custom".to_string());

        // Promotion preserves the enabled flag
        assert!(!config.cache_enabled());
        assert_eq!(config.cache_dir(), Some(PathBuf::from("custom")));
    }

    #[test]
    fn test_discover_finds_config() {
        let temp = tempfile::tempdir().unwrap();
        assert!(LinterConfig::discover(temp.path()).is_none());

        fs::write(temp.path().join(".siftlint.json"), "{}").unwrap();

        let found = LinterConfig::discover(temp.path()).unwrap();
        assert!(found.ends_with(".siftlint.json"));
    }

    #[test]
    fn test_discover_prefers_dotfile() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(".siftlint.json"), "{}").unwrap();
        fs::write(temp.path().join("siftlint.config.json"), "{}").unwrap();

        let found = LinterConfig::discover(temp.path()).unwrap();
        assert!(found.ends_with(".siftlint.json"));
    }

    #[test]
    fn test_from_file_records_base_dir() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(".siftlint.json");
        fs::write(&path, r#"{ "output_dir": "dist" }"#).unwrap();

        let config = LinterConfig::from_file(&path).unwrap();
        assert_eq!(config.base_dir.as_deref(), Some(temp.path()));
        assert_eq!(config.output_dir, "dist");
    }
}

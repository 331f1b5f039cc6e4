//! # siftlint_core
//!
//! Core lint orchestration for siftlint.
//!
//! This crate provides:
//! - The main `Linter` orchestrator (cache partition + parallel dispatch)
//! - Configuration loading and discovery
//! - File discovery and filtering
//!
//! ## Example
//!
//! ```rust,ignore
//! use siftlint_core::{Linter, LinterConfig, TextEngine};
//!
//! let config = LinterConfig::from_file(".siftlint.json")?;
//! let linter = Linter::new(config, Box::new(TextEngine::new()))?;
//!
//! let (results, failures) = linter.lint_project()?;
//! for result in results {
//!     println!("{}: {} findings", result.path.display(), result.findings.len());
//! }
//! ```

mod config;
mod error;
mod file_finder;
mod linter;
mod result;

pub use config::{CacheConfig, CacheConfigDetail, LinterConfig};
pub use error::LinterError;
pub use file_finder::FileFinder;
pub use linter::{LintFilesResult, Linter};
pub use result::{LintResult, LintSummary};

pub use siftlint_cache::{CacheLocation, CacheManager, Strategy};
pub use siftlint_engine::{Finding, LintEngine, Location, Severity, Span, TextEngine};

//! The engine boundary.

use std::path::Path;

use crate::{EngineError, Finding};

/// A lint engine the orchestrator can dispatch files to.
///
/// Implementations receive the file content already read from disk and
/// return findings in document order. The caching layer invokes `lint`
/// only for files without a valid cached result.
pub trait LintEngine: Send + Sync {
    /// Engine name, used in diagnostics.
    fn name(&self) -> &str;

    /// Lints a single file's content.
    fn lint(&self, path: &Path, content: &str) -> Result<Vec<Finding>, EngineError>;
}

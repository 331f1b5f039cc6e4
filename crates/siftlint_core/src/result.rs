//! Lint result types.

use std::path::PathBuf;

use siftlint_engine::{Finding, Severity};

/// Result of linting a single file.
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Path to the linted file, relative to the project root.
    pub path: PathBuf,

    /// Findings for the file, in document order.
    pub findings: Vec<Finding>,

    /// Whether the result was served from cache.
    pub from_cache: bool,
}

impl LintResult {
    /// Creates a freshly linted result.
    pub fn new(path: PathBuf, findings: Vec<Finding>) -> Self {
        Self {
            path,
            findings,
            from_cache: false,
        }
    }

    /// Creates a result served from cache.
    pub fn cached(path: PathBuf, findings: Vec<Finding>) -> Self {
        Self {
            path,
            findings,
            from_cache: true,
        }
    }

    /// Returns true if any finding is an error.
    pub fn has_errors(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity == Severity::Error)
    }

    /// Number of error findings.
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    /// Number of warning findings.
    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }
}

/// Summary of linting multiple files.
#[derive(Debug, Default)]
pub struct LintSummary {
    /// Total files processed.
    pub files_checked: usize,

    /// Files served from cache.
    pub files_from_cache: usize,

    /// Total findings.
    pub total_findings: usize,

    /// Error findings.
    pub errors: usize,

    /// Warning findings.
    pub warnings: usize,
}

impl LintSummary {
    /// Creates a summary from results.
    pub fn from_results(results: &[LintResult]) -> Self {
        let mut summary = Self::default();

        for result in results {
            summary.files_checked += 1;
            if result.from_cache {
                summary.files_from_cache += 1;
            }
            summary.total_findings += result.findings.len();
            summary.errors += result.error_count();
            summary.warnings += result.warning_count();
        }

        summary
    }
}

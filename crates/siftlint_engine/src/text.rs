//! Built-in line-oriented lint engine.

use std::path::Path;

use crate::{EngineError, Finding, LintEngine, Location, Severity, Span};

const DEFAULT_MAX_LINE_LENGTH: usize = 120;

/// A small built-in engine with line-oriented checks.
///
/// Rules:
/// - `merge-conflict-markers` (error): unresolved `<<<<<<<`/`=======`/`>>>>>>>` lines
/// - `no-todo` (warning): TODO markers left in the text
/// - `no-trailing-whitespace` (warning)
/// - `max-line-length` (warning): lines longer than the configured limit
pub struct TextEngine {
    max_line_length: usize,
}

impl TextEngine {
    /// Creates an engine with the default line-length limit.
    pub fn new() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }

    /// Sets the maximum line length.
    pub fn with_max_line_length(mut self, limit: usize) -> Self {
        self.max_line_length = limit;
        self
    }

    fn check_line(&self, line: &str, line_no: u32, offset: u32, findings: &mut Vec<Finding>) {
        let line_span = Span::new(offset, offset + line.len() as u32);

        if line.starts_with("<<<<<<< ") || line.starts_with(">>>>>>> ") || line == "=======" {
            findings.push(
                Finding::new(
                    "merge-conflict-markers",
                    "Unresolved merge conflict marker",
                    line_span,
                )
                .with_location(Location::new(line_no, 1)),
            );
            // The rest of the line is conflict noise, not content
            return;
        }

        if let Some(pos) = line.find("TODO") {
            findings.push(
                Finding::new(
                    "no-todo",
                    "Avoid committing TODO markers",
                    Span::new(offset + pos as u32, offset + pos as u32 + 4),
                )
                .with_severity(Severity::Warning)
                .with_location(Location::new(line_no, pos as u32 + 1)),
            );
        }

        let trimmed_len = line.trim_end().len();
        if trimmed_len != line.len() {
            findings.push(
                Finding::new(
                    "no-trailing-whitespace",
                    "Trailing whitespace",
                    Span::new(offset + trimmed_len as u32, offset + line.len() as u32),
                )
                .with_severity(Severity::Warning)
                .with_location(Location::new(line_no, trimmed_len as u32 + 1)),
            );
        }

        let char_count = line.chars().count();
        if char_count > self.max_line_length {
            findings.push(
                Finding::new(
                    "max-line-length",
                    format!(
                        "Line exceeds {} characters ({} found)",
                        self.max_line_length, char_count
                    ),
                    line_span,
                )
                .with_severity(Severity::Warning)
                .with_location(Location::new(line_no, 1)),
            );
        }
    }
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LintEngine for TextEngine {
    fn name(&self) -> &str {
        "text"
    }

    fn lint(&self, _path: &Path, content: &str) -> Result<Vec<Finding>, EngineError> {
        let mut findings = Vec::new();
        let mut offset = 0usize;

        for (i, raw) in content.split_inclusive('\n').enumerate() {
            let line = raw.trim_end_matches(['\n', '\r']);
            self.check_line(line, i as u32 + 1, offset as u32, &mut findings);
            offset += raw.len();
        }

        Ok(findings)
    }
}

//! Finding types for lint results.

use serde::{Deserialize, Serialize};

/// Severity level for findings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    Warning,
    /// Info - informational message.
    Info,
}

/// A byte span in the source text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct Span {
    /// Start offset (inclusive).
    pub start: u32,
    /// End offset (exclusive).
    pub end: u32,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the span length in bytes.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// A 1-based line/column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// Creates a new location.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A finding reported by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct Finding {
    /// The rule that produced this finding.
    pub rule_id: String,

    /// The finding message.
    pub message: String,

    /// Byte span in the source.
    pub span: Span,

    /// Line/column location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
}

impl Finding {
    /// Creates a new finding with `Error` severity.
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            span,
            loc: None,
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, loc: Location) -> Self {
        self.loc = Some(loc);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_finding_new() {
        let finding = Finding::new("no-todo", "Found TODO", Span::new(0, 4));

        assert_eq!(finding.rule_id, "no-todo");
        assert_eq!(finding.message, "Found TODO");
        assert_eq!(finding.severity, Severity::Error);
        assert!(finding.loc.is_none());
    }

    #[test]
    fn test_finding_with_severity() {
        let finding =
            Finding::new("rule", "message", Span::new(0, 5)).with_severity(Severity::Warning);

        assert_eq!(finding.severity, Severity::Warning);
    }

    #[test]
    fn test_finding_with_location() {
        let finding =
            Finding::new("rule", "message", Span::new(0, 10)).with_location(Location::new(3, 7));

        let loc = finding.loc.unwrap();
        assert_eq!(loc.line, 3);
        assert_eq!(loc.column, 7);
    }

    #[test]
    fn test_severity_default() {
        assert_eq!(Severity::default(), Severity::Error);
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(3, 10).len(), 7);
        assert!(Span::new(5, 5).is_empty());
        assert!(!Span::new(0, 1).is_empty());
    }

    #[test]
    fn test_finding_serialization() {
        let finding = Finding::new("no-todo", "Found TODO", Span::new(10, 14));
        let json = serde_json::to_string(&finding).unwrap();

        assert!(json.contains("no-todo"));
        assert!(json.contains("Found TODO"));
        // loc is None and should be omitted
        assert!(!json.contains("loc"));
    }

    #[test]
    fn test_finding_deserialization() {
        let json = r#"{
            "rule_id": "no-todo",
            "message": "Found TODO",
            "span": { "start": 0, "end": 4 },
            "severity": "warning"
        }"#;

        let finding: Finding = serde_json::from_str(json).unwrap();

        assert_eq!(finding.rule_id, "no-todo");
        assert_eq!(finding.span.start, 0);
        assert_eq!(finding.span.end, 4);
        assert_eq!(finding.severity, Severity::Warning);
    }

    #[test]
    fn test_finding_serialization_roundtrip() {
        let finding = Finding::new("max-line-length", "Line exceeds 120 characters", Span::new(0, 130))
            .with_severity(Severity::Warning)
            .with_location(Location::new(12, 1));

        let json = serde_json::to_string(&finding).unwrap();
        let deserialized: Finding = serde_json::from_str(&json).unwrap();

        assert_eq!(finding, deserialized);
    }

    #[test]
    fn test_finding_ordering_by_span() {
        let early = Finding::new("a", "m", Span::new(5, 10));
        let late = Finding::new("a", "m", Span::new(20, 25));

        let mut findings = vec![late.clone(), early.clone()];
        findings.sort_by(|a, b| a.span.start.cmp(&b.span.start));

        assert_eq!(findings[0], early);
        assert_eq!(findings[1], late);
    }
}

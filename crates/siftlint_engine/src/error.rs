//! Engine error types.

use thiserror::Error;

/// Errors that can occur while running a lint engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A rule failed on the given input.
    #[error("Rule '{rule}' failed: {message}")]
    Rule { rule: String, message: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Creates a rule failure error.
    pub fn rule(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rule {
            rule: rule.into(),
            message: message.into(),
        }
    }
}

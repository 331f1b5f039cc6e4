//! # siftlint_engine
//!
//! Finding types and the engine boundary for siftlint.
//!
//! This crate defines:
//! - The `Finding` types produced by lint rules
//! - The `LintEngine` trait the orchestrator dispatches cache misses to
//! - A built-in `TextEngine` with a small line-oriented rule set
//!
//! The cache layer treats whatever implements `LintEngine` as an external
//! collaborator: it is invoked only for files without a valid cached result.

mod engine;
mod error;
mod finding;
mod text;

pub use engine::LintEngine;
pub use error::EngineError;
pub use finding::{Finding, Location, Severity, Span};
pub use text::TextEngine;

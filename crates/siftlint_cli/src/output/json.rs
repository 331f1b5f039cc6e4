//! JSON output formatter

use miette::{IntoDiagnostic, Result};
use siftlint_core::LintResult;

pub fn output_json(results: &[LintResult]) -> Result<()> {
    let output: Vec<_> = results
        .iter()
        .map(|r| {
            serde_json::json!({
                "path": r.path.display().to_string(),
                "from_cache": r.from_cache,
                "findings": r.findings,
            })
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}

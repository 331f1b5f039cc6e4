//! Text output formatter

use siftlint_core::{LintResult, LintSummary, Severity};

pub fn output_text(results: &[LintResult]) {
    for result in results {
        if result.findings.is_empty() {
            continue;
        }

        println!("\n{}:", result.path.display());
        for finding in &result.findings {
            let severity = match finding.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
                Severity::Info => "info",
            };
            let position = match finding.loc {
                Some(loc) => format!("{}:{}", loc.line, loc.column),
                None => format!("{}:{}", finding.span.start, finding.span.end),
            };
            println!(
                "  {} {} [{}]: {}",
                position, severity, finding.rule_id, finding.message
            );
        }
    }

    let summary = LintSummary::from_results(results);

    println!();
    println!(
        "Checked {} files ({} from cache), found {} problems ({} errors, {} warnings)",
        summary.files_checked,
        summary.files_from_cache,
        summary.total_findings,
        summary.errors,
        summary.warnings
    );
}

//! Lint command implementation

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use tracing::info;

use siftlint_core::{
    LintResult, LintSummary, Linter, LinterConfig, Severity, Strategy, TextEngine,
};

use crate::cli::{Cli, OutputFormat};
use crate::output::output_results;

pub fn run_lint(
    cli: &Cli,
    files: &[PathBuf],
    format: OutputFormat,
    quiet: bool,
    max_warnings: Option<usize>,
) -> Result<bool> {
    let mut config = if let Some(ref path) = cli.config {
        LinterConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };

    apply_cache_overrides(cli, &mut config)?;

    let linter = Linter::new(config, Box::new(TextEngine::new())).into_diagnostic()?;

    let (results, failures) = if files.is_empty() {
        linter.lint_project().into_diagnostic()?
    } else {
        linter.lint_files(files).into_diagnostic()?
    };

    if !failures.is_empty() {
        eprintln!("\n{} file(s) failed to lint:", failures.len());
        for (path, error) in &failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    // The warning threshold sees the unfiltered counts; --quiet only trims
    // the report afterwards
    let summary = LintSummary::from_results(&results);
    let over_warning_limit = max_warnings.is_some_and(|max| summary.warnings > max);
    if over_warning_limit {
        eprintln!(
            "Warning threshold exceeded: {} warnings (max {} allowed)",
            summary.warnings,
            max_warnings.unwrap_or(0)
        );
    }

    let results = if quiet { errors_only(results) } else { results };

    let has_errors = output_results(&results, format)?;

    Ok(has_errors || over_warning_limit || !failures.is_empty())
}

/// CLI cache flags override the config file.
fn apply_cache_overrides(cli: &Cli, config: &mut LinterConfig) -> Result<()> {
    if let Some(ref dir) = cli.cache_dir {
        config.cache_detail_mut().dir = Some(dir.to_string_lossy().to_string());
    }

    if let Some(ref location) = cli.cache_location {
        config.cache_detail_mut().location = Some(location.to_string_lossy().to_string());
    }

    if let Some(ref strategy) = cli.cache_strategy {
        let parsed: Strategy = strategy
            .parse()
            .map_err(|e| miette::miette!("{}", e))?;
        config.cache_detail_mut().strategy = parsed;
    }

    if cli.no_cache {
        config.cache_detail_mut().enabled = false;
    }

    Ok(())
}

fn errors_only(results: Vec<LintResult>) -> Vec<LintResult> {
    results
        .into_iter()
        .map(|mut result| {
            result.findings.retain(|f| f.severity == Severity::Error);
            result
        })
        .collect()
}

pub fn find_config() -> Result<LinterConfig> {
    if let Some(path) = LinterConfig::discover(".") {
        info!("Using config: {}", path.display());
        return LinterConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(LinterConfig::new())
}

//! Shared output formatting for check results.

use anyhow::Result;
use strict_deps_core::LintResult;

use crate::OutputFormat;

/// Print check results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        println!("\x1b[31merror\x1b[0m: {violation}");
    }

    let summary_color = if result.has_violations() {
        "\x1b[31m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} violation(s) in {} import(s)\x1b[0m",
        summary_color,
        result.violations.len(),
        result.events_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{}: import {} is not allowed", violation.importer_path, violation.import_path);
    }
}

//! Core types: import events, violations, and check results.

use serde::{Deserialize, Serialize};

/// One import statement, as observed by the host.
///
/// Constructed by the host per import statement, consumed once by
/// [`RuleEngine::check`](crate::RuleEngine::check), then discarded.
/// `importer_path` must already be relative to the project root the
/// engine was constructed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEvent {
    /// Import specifier exactly as written in source.
    pub raw_specifier: String,
    /// Importing file's path, relative to the project root.
    pub importer_path: String,
    /// Whether this is a type-only import (erased at build time).
    #[serde(default)]
    pub is_type_only: bool,
}

/// A boundary violation: one per rule that matched the import and was not
/// satisfied by any allow condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Canonical (alias- and relative-resolved) import path.
    pub import_path: String,
    /// Importing file's path, relative to the project root.
    pub importer_path: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(import_path: impl Into<String>, importer_path: impl Into<String>) -> Self {
        Self {
            import_path: import_path.into(),
            importer_path: importer_path.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "import {} is not allowed from {}.",
            self.import_path, self.importer_path
        )
    }
}

/// Result of checking a batch of import events.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of import events checked.
    pub events_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any violation was found.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Formats the result as a human-readable report.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        for v in &self.violations {
            let _ = writeln!(report, "{v}");
        }
        let _ = writeln!(
            report,
            "\nFound {} violation(s) in {} import(s)",
            self.violations.len(),
            self.events_checked
        );
        report
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.events_checked += other.events_checked;
    }
}

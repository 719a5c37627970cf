//! Dependency rule engine.
//!
//! Evaluates configured module boundary rules against resolved import
//! paths, producing [`Violation`]s. Stateless per event: no shared
//! mutable state, so a host may check events from parallel analysis
//! passes on the same engine.

use std::path::PathBuf;

use crate::config::RuleConfig;
use crate::matcher::is_match;
use crate::resolver::ImportResolver;
use crate::types::{ImportEvent, Violation};

/// Evaluates module boundary rules against import events.
pub struct RuleEngine {
    config: RuleConfig,
    resolver: ImportResolver,
}

impl RuleEngine {
    /// Creates a new engine from a rule config and an explicit project
    /// root (used for alias resolution).
    #[must_use]
    pub fn new(config: RuleConfig, project_root: impl Into<PathBuf>) -> Self {
        let resolver = ImportResolver::new(project_root);
        Self { config, resolver }
    }

    /// Checks a single import event against every configured rule.
    ///
    /// Returns one violation per matching rule that no allow condition
    /// satisfies; rules never short-circuit each other. Total: any
    /// well-formed event yields a (possibly empty) list, never an error.
    #[must_use]
    pub fn check(&self, event: &ImportEvent) -> Vec<Violation> {
        // Global exemption short-circuits before resolution; the alias
        // file is not even read for an exempted import.
        if self.config.options.allow_type_import && event.is_type_only {
            return Vec::new();
        }

        let importer_path = event.importer_path.as_str();
        let import_path = self.resolver.resolve(
            &event.raw_specifier,
            self.config
                .options
                .resolve_relative_import
                .then_some(importer_path),
        );

        let mut violations = Vec::new();

        for rule in self
            .config
            .rules
            .iter()
            .filter(|rule| is_match(&import_path, &rule.module))
        {
            let allowed = rule
                .allow_reference_from
                .iter()
                .any(|allow| is_match(importer_path, allow))
                || (rule.allow_same_module && is_match(importer_path, &rule.module))
                || (rule.allow_type_import && event.is_type_only);

            if !allowed {
                violations.push(Violation::new(import_path.clone(), importer_path));
            }
        }

        violations
    }
}

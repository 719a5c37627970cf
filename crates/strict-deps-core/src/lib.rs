//! # strict-deps-core
//!
//! Import boundary rule engine: decides, per import statement, whether an
//! import crosses a forbidden module boundary.
//!
//! The host (an editor integration, a linter plugin, the bundled CLI) owns
//! AST traversal and hands over one [`ImportEvent`] per import statement;
//! this crate owns the two non-trivial pieces:
//!
//! - [`ImportResolver`] turns a raw, possibly aliased or relative import
//!   specifier into a canonical project-rooted path, using
//!   `tsconfig.json` path aliases ([`PathAliasMap`])
//! - [`RuleEngine`] matches the canonical path against configured
//!   [`ModuleRule`]s and produces [`Violation`]s
//!
//! ## Example
//!
//! ```ignore
//! use strict_deps_core::{ImportEvent, RuleConfig, RuleEngine};
//!
//! let config = RuleConfig::from_file(Path::new("strict-deps.toml"))?;
//! let engine = RuleEngine::new(config, ".");
//!
//! let violations = engine.check(&ImportEvent {
//!     raw_specifier: "@/components/ui/Text".into(),
//!     importer_path: "src/pages/index.ts".into(),
//!     is_type_only: false,
//! });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod alias;
pub mod config;
pub mod engine;
pub mod matcher;
mod paths;
pub mod resolver;
mod types;

pub use alias::PathAliasMap;
pub use config::{ConfigError, GlobalOptions, ModuleRule, RuleConfig};
pub use engine::RuleEngine;
pub use matcher::is_match;
pub use resolver::ImportResolver;
pub use types::{ImportEvent, LintResult, Violation};

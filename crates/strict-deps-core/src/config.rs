//! Rule configuration: module boundary rules and global options.
//!
//! The on-disk formats are TOML (`[[rules]]` tables plus an `[options]`
//! table) and JSON (the host interface shape verbatim). Both use the same
//! camelCase keys: `module`, `allowReferenceFrom`, `allowSameModule`,
//! `allowTypeImport`, `resolveRelativeImport`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One configured module boundary.
///
/// Rules are immutable once loaded. Rule order never changes the outcome;
/// it only fixes the order of multi-rule violation output.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRule {
    /// Glob or plain prefix identifying the protected module.
    pub module: String,

    /// Patterns identifying importer locations permitted to reference the
    /// module.
    #[serde(default)]
    pub allow_reference_from: Vec<String>,

    /// Importers whose own path matches `module` are exempt.
    #[serde(default)]
    pub allow_same_module: bool,

    /// Type-only imports of this module are exempt.
    #[serde(default)]
    pub allow_type_import: bool,
}

/// Options applying across all rules.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalOptions {
    /// Resolve `./` and `../` specifiers against the importer's path
    /// before rule matching.
    #[serde(default)]
    pub resolve_relative_import: bool,

    /// Any type-only import bypasses resolution and rule evaluation
    /// entirely.
    #[serde(default)]
    pub allow_type_import: bool,
}

/// Top-level rule configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleConfig {
    /// Boundary rules, evaluated independently per import event.
    #[serde(default)]
    pub rules: Vec<ModuleRule>,

    /// Global options.
    #[serde(default)]
    pub options: GlobalOptions,
}

/// Errors when loading rule configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML or JSON.
    #[error("invalid config: {message}")]
    Parse {
        /// Parse error detail.
        message: String,
    },
    /// Config is structurally invalid.
    #[error("config validation: {0}")]
    Validation(String),
}

impl RuleConfig {
    /// Load from a TOML or JSON file, keyed on the file extension.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if path.extension().is_some_and(|e| e == "json") {
            Self::parse_json(&content)
        } else {
            Self::parse_toml(&content)
        }
    }

    /// Parse from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if the TOML is invalid.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Parse from a JSON string (the host interface shape).
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is invalid.
    pub fn parse_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Validate config consistency.
    ///
    /// # Errors
    ///
    /// Returns error describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.module.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "rules[{i}]: empty module pattern"
                )));
            }
        }
        Ok(())
    }
}

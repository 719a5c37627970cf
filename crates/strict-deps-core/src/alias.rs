//! Path alias store: `tsconfig.json` alias loading.
//!
//! Loads `compilerOptions.baseUrl` and `compilerOptions.paths` from the
//! project root. Loading is best-effort by design: absence of the file is
//! a valid, common state, so every failure mode resolves to an empty map
//! and is never surfaced to the caller. The fallible path exists as an
//! explicit [`Result`]-returning loader internally rather than as
//! exception-style control flow.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::paths;

/// Alias configuration file name, relative to the project root.
const TSCONFIG_NAME: &str = "tsconfig.json";

/// Ordered alias-to-target mapping derived from `tsconfig.json`.
///
/// Built fresh on every resolution call; there is no cross-call cache, so
/// no invalidation logic exists either. Entry order follows the JSON
/// object key order of `compilerOptions.paths`, which matters because
/// alias substitution is an order-dependent fold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathAliasMap {
    /// `compilerOptions.baseUrl`, if configured.
    pub base_url: Option<String>,
    /// `(alias_pattern, target_prefix)` pairs in configuration order.
    /// Targets are already joined with `base_url`; `*` markers are kept
    /// and stripped at substitution time.
    pub aliases: Vec<(String, String)>,
}

/// Errors while reading the alias configuration file.
///
/// Never escapes [`PathAliasMap::load`]; only the internal loader returns
/// it.
#[derive(Debug, thiserror::Error)]
enum AliasError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid tsconfig: {message}")]
    Parse { message: String },
}

/// The subset of `tsconfig.json` this store understands.
#[derive(Debug, Deserialize)]
struct Tsconfig {
    #[serde(rename = "compilerOptions")]
    compiler_options: Option<CompilerOptions>,
}

#[derive(Debug, Deserialize)]
struct CompilerOptions {
    #[serde(rename = "baseUrl")]
    base_url: Option<String>,
    /// Alias pattern -> ordered target alternatives. Key order is
    /// preserved (serde_json `preserve_order`).
    paths: Option<serde_json::Map<String, serde_json::Value>>,
}

impl PathAliasMap {
    /// Loads the alias map for a project root, never failing upward.
    ///
    /// Missing file, unreadable file, malformed JSON, and missing
    /// `compilerOptions` all yield an empty map.
    #[must_use]
    pub fn load(project_root: &Path) -> Self {
        match Self::try_load(project_root) {
            Ok(map) => map,
            Err(e) => {
                tracing::debug!("no path aliases for {}: {e}", project_root.display());
                Self::default()
            }
        }
    }

    /// Returns true if no aliases are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    fn try_load(project_root: &Path) -> Result<Self, AliasError> {
        let path = project_root.join(TSCONFIG_NAME);
        let content = std::fs::read_to_string(&path).map_err(|e| AliasError::Io {
            path: path.clone(),
            source: e,
        })?;
        let tsconfig: Tsconfig =
            serde_json::from_str(&content).map_err(|e| AliasError::Parse {
                message: e.to_string(),
            })?;

        let Some(options) = tsconfig.compiler_options else {
            return Ok(Self::default());
        };

        let mut aliases = Vec::new();
        for (pattern, targets) in options.paths.unwrap_or_default() {
            // Existence of import targets is not checked, so alternatives
            // cannot be ranked; only the first target is usable.
            let Some(first) = targets.as_array().and_then(|t| t.first()) else {
                tracing::debug!("alias {pattern} has no targets, skipping");
                continue;
            };
            let Some(target) = first.as_str() else {
                tracing::debug!("alias {pattern} target is not a string, skipping");
                continue;
            };
            let target = match &options.base_url {
                Some(base) => paths::join(base, target),
                None => target.to_string(),
            };
            aliases.push((pattern, target));
        }

        Ok(Self {
            base_url: options.base_url,
            aliases,
        })
    }
}

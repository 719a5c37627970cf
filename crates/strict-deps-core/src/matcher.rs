//! Pattern matching for module and importer-location patterns.
//!
//! One matcher serves both sides of rule evaluation, with an explicit
//! branch: patterns containing glob metacharacters get full glob
//! matching; anything else is a plain string-prefix match. Prefix
//! matching enforces no path-segment boundary (`src/componentsX` matches
//! the pattern `src/components`); that is a documented limitation of the
//! rule format, not one to silently fix here.

use globset::GlobBuilder;

/// Glob metacharacters that switch a pattern from prefix to glob mode.
const GLOB_CHARS: &[char] = &['*', '?', '{', '}', '[', ']'];

/// Returns true if the pattern should be treated as a glob expression.
#[must_use]
pub fn is_glob(pattern: &str) -> bool {
    pattern.contains(GLOB_CHARS)
}

/// Matches a candidate path against a rule pattern.
///
/// Glob patterns use `*`/`?` within one path segment, `**` across
/// segments, plus `{}` alternation and `[]` character classes. A glob
/// that fails to compile degrades to prefix matching so that rule
/// evaluation stays total.
#[must_use]
pub fn is_match(candidate: &str, pattern: &str) -> bool {
    if !is_glob(pattern) {
        return candidate.starts_with(pattern);
    }

    match GlobBuilder::new(pattern).literal_separator(true).build() {
        Ok(glob) => glob.compile_matcher().is_match(candidate),
        Err(e) => {
            tracing::debug!("invalid glob pattern {pattern}: {e}, using prefix match");
            candidate.starts_with(pattern)
        }
    }
}

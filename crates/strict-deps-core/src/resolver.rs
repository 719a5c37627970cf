//! Import path resolution: raw specifier to canonical project-rooted path.

use std::path::{Path, PathBuf};

use crate::alias::PathAliasMap;
use crate::paths;

/// Resolves raw import specifiers into canonical project-rooted paths.
///
/// Resolution is total: it always returns a string, falling back to the
/// (possibly relative-resolved) input when no alias applies. The alias
/// map is re-read from `tsconfig.json` on every call; callers that need
/// caching must key it by project root and file modification state, which
/// this resolver deliberately does not do.
#[derive(Debug, Clone)]
pub struct ImportResolver {
    project_root: PathBuf,
}

impl ImportResolver {
    /// Creates a resolver rooted at an explicit project directory.
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Returns the project root this resolver reads aliases from.
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolves a raw import specifier.
    ///
    /// With `importer_path` given, `./` and `../` specifiers are first
    /// rewritten against the importer's directory; without it they pass
    /// through unchanged. Every alias is then applied in configuration
    /// order to the evolving string (an accumulating fold, not
    /// first-match-wins): each step is a literal first-occurrence
    /// substring replacement of the `*`-stripped alias pattern by the
    /// `*`-stripped target. Stacked substitutions can mangle a path when
    /// aliases overlap; that is observable behavior of the rule format
    /// and is preserved.
    #[must_use]
    pub fn resolve(&self, raw_specifier: &str, importer_path: Option<&str>) -> String {
        let aliases = PathAliasMap::load(&self.project_root);

        let mut resolved = raw_specifier.to_string();
        if let Some(importer) = importer_path {
            if raw_specifier.starts_with("./") || raw_specifier.starts_with("../") {
                resolved = paths::join(paths::dirname(importer), raw_specifier);
            }
        }

        for (pattern, target) in &aliases.aliases {
            resolved = resolved.replacen(
                &pattern.replacen('*', "", 1),
                &target.replacen('*', "", 1),
                1,
            );
        }

        tracing::trace!("resolved {raw_specifier} -> {resolved}");
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn resolver_with_tsconfig(content: &str) -> (TempDir, ImportResolver) {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("tsconfig.json"), content).unwrap();
        let resolver = ImportResolver::new(tmp.path());
        (tmp, resolver)
    }

    fn resolver_without_tsconfig() -> (TempDir, ImportResolver) {
        let tmp = TempDir::new().unwrap();
        let resolver = ImportResolver::new(tmp.path());
        (tmp, resolver)
    }

    fn paths_tsconfig(alias: &str, target: &str) -> String {
        format!(r#"{{"compilerOptions": {{"paths": {{"{alias}": ["{target}"]}}}}}}"#)
    }

    #[test]
    fn resolves_relative_specifier_against_importer() {
        let (_tmp, resolver) = resolver_without_tsconfig();
        assert_eq!(
            resolver.resolve("../../components/ui/Text", Some("src/pages/aaa/bbb.ts")),
            "src/components/ui/Text"
        );
    }

    #[test]
    fn resolves_dot_slash_specifier() {
        let (_tmp, resolver) = resolver_without_tsconfig();
        assert_eq!(
            resolver.resolve("./Header", Some("src/components/ui/Text.tsx")),
            "src/components/ui/Header"
        );
    }

    #[test]
    fn leaves_relative_specifier_without_importer() {
        let (_tmp, resolver) = resolver_without_tsconfig();
        assert_eq!(
            resolver.resolve("../../components/ui/Text", None),
            "../../components/ui/Text"
        );
    }

    #[test]
    fn passes_through_when_tsconfig_missing() {
        let (_tmp, resolver) = resolver_without_tsconfig();
        assert_eq!(resolver.resolve("components/aaa/bbb", None), "components/aaa/bbb");
    }

    #[test]
    fn passes_through_when_no_paths_setting() {
        let (_tmp, resolver) = resolver_with_tsconfig("{}");
        assert_eq!(resolver.resolve("components/aaa/bbb", None), "components/aaa/bbb");
    }

    #[test]
    fn resolves_alias_forms() {
        // Trailing-slash, bare, and wildcard alias keys all substitute the
        // same way once `*` is stripped.
        for (alias, target) in [
            ("@/components/", "components/"),
            ("@/components", "components"),
            ("@/components/*", "components/*"),
        ] {
            let (_tmp, resolver) = resolver_with_tsconfig(&paths_tsconfig(alias, target));
            assert_eq!(
                resolver.resolve("@/components/aaa/bbb", None),
                "components/aaa/bbb",
                "alias {alias}"
            );
            assert_eq!(
                resolver.resolve("components/aaa/bbb", None),
                "components/aaa/bbb",
                "alias {alias} must not touch unaliased paths"
            );
        }
    }

    #[test]
    fn resolves_alias_with_base_url_forms() {
        for (base_url, expected) in [
            (".", "components/aaa/bbb"),
            ("./", "components/aaa/bbb"),
            ("../", "../components/aaa/bbb"),
            ("src", "src/components/aaa/bbb"),
            ("./src", "src/components/aaa/bbb"),
            ("src/", "src/components/aaa/bbb"),
            ("./src/", "src/components/aaa/bbb"),
        ] {
            let (_tmp, resolver) = resolver_with_tsconfig(&format!(
                r#"{{"compilerOptions": {{"baseUrl": "{base_url}", "paths": {{"@/components/": ["components/"]}}}}}}"#
            ));
            assert_eq!(
                resolver.resolve("@/components/aaa/bbb", None),
                expected,
                "baseUrl {base_url}"
            );
        }
    }

    #[test]
    fn relative_resolution_happens_before_alias_substitution() {
        let (_tmp, resolver) = resolver_with_tsconfig(&paths_tsconfig("src/vendor/", "vendor/"));
        assert_eq!(
            resolver.resolve("../vendor/date", Some("src/pages/aaa.ts")),
            "vendor/date"
        );
    }

    #[test]
    fn aliases_accumulate_in_order() {
        // Both aliases apply in sequence to the evolving string; the
        // second rewrites the first's output.
        let (_tmp, resolver) = resolver_with_tsconfig(
            r#"{"compilerOptions": {"paths": {"@/*": ["src/*"], "src/legacy/*": ["legacy/*"]}}}"#,
        );
        assert_eq!(resolver.resolve("@/legacy/util", None), "legacy/util");
    }

    #[test]
    fn substitution_replaces_first_occurrence_only() {
        let (_tmp, resolver) = resolver_with_tsconfig(&paths_tsconfig("lib/", "src/lib/"));
        assert_eq!(resolver.resolve("lib/x/lib/y", None), "src/lib/x/lib/y");
    }

    #[test]
    fn resolution_is_idempotent_across_calls() {
        let (_tmp, resolver) = resolver_with_tsconfig(
            r#"{"compilerOptions": {"baseUrl": "src", "paths": {"@/components/": ["components/"]}}}"#,
        );
        let first = resolver.resolve("@/components/aaa/bbb", Some("src/pages/aaa.ts"));
        let second = resolver.resolve("@/components/aaa/bbb", Some("src/pages/aaa.ts"));
        assert_eq!(first, second);
        assert_eq!(first, "src/components/aaa/bbb");
    }
}

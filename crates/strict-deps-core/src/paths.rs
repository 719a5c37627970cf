//! Lexical path helpers for project-relative module paths.
//!
//! Module paths here are plain `/`-separated strings relative to the
//! project root; they are never touched as OS paths. Joining is purely
//! lexical: `.` segments collapse, `..` segments pop what they can and
//! survive at the front otherwise, and a trailing separator on the last
//! operand is preserved (alias targets like `src/components/` rely on it
//! for substring substitution).

/// Joins two relative path strings and normalizes the result.
pub(crate) fn join(base: &str, tail: &str) -> String {
    let trailing = tail.ends_with('/') || (tail.is_empty() && base.ends_with('/'));
    let mut segments: Vec<&str> = Vec::new();

    for segment in base.split('/').chain(tail.split('/')) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&"..") | None => segments.push(".."),
                Some(_) => {
                    segments.pop();
                }
            },
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        return ".".to_string();
    }

    let mut joined = segments.join("/");
    if trailing {
        joined.push('/');
    }
    joined
}

/// Returns the directory portion of a relative path, `.` when there is
/// none.
pub(crate) fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => ".",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_plain_segments() {
        assert_eq!(join("src", "components"), "src/components");
        assert_eq!(join("src/pages", "aaa.ts"), "src/pages/aaa.ts");
    }

    #[test]
    fn join_collapses_dot_segments() {
        assert_eq!(join(".", "components"), "components");
        assert_eq!(join("./", "components/"), "components/");
        assert_eq!(join("./src", "components"), "src/components");
        assert_eq!(join("src/pages", "./aaa"), "src/pages/aaa");
    }

    #[test]
    fn join_resolves_parent_segments() {
        assert_eq!(
            join("src/pages/aaa", "../../components/ui/Text"),
            "src/components/ui/Text"
        );
        assert_eq!(join("src", ".."), ".");
    }

    #[test]
    fn join_keeps_unresolvable_parents() {
        assert_eq!(join("../", "components/"), "../components/");
        assert_eq!(join("..", "../x"), "../../x");
    }

    #[test]
    fn join_preserves_trailing_separator() {
        assert_eq!(join("src", "components/"), "src/components/");
        assert_eq!(join(".", "components/"), "components/");
    }

    #[test]
    fn join_keeps_wildcard_segments_intact() {
        assert_eq!(join("src", "components/*"), "src/components/*");
    }

    #[test]
    fn dirname_cuts_last_segment() {
        assert_eq!(dirname("src/pages/aaa/bbb.ts"), "src/pages/aaa");
        assert_eq!(dirname("src/a.ts"), "src");
    }

    #[test]
    fn dirname_of_bare_file_is_dot() {
        assert_eq!(dirname("bbb.ts"), ".");
    }
}

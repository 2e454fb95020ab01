//! Language tag handling.

/// Imports emitted ahead of the class for the `java` tag.
pub const JAVA_IMPORTS: &[&str] = &[
    "import java.io.File;",
    "import java.nio.file.Path;",
    "import java.nio.file.Paths;",
    "import java.util.LinkedHashMap;",
    "import java.util.Map;",
    "import java.util.Objects;",
    "import java.util.function.Consumer;",
    "import java.util.regex.Pattern;",
];

/// Whether `tag` names a language with a known preamble.
pub fn is_known_language(tag: &str) -> bool {
    tag.trim().eq_ignore_ascii_case("java")
}

/// Preamble lines for a language tag. Unknown tags have none.
pub fn imports_for(tag: &str) -> Option<&'static [&'static str]> {
    is_known_language(tag).then_some(JAVA_IMPORTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert!(is_known_language("java"));
        assert!(is_known_language("Java"));
        assert!(is_known_language("JAVA"));
        assert_eq!(imports_for("java"), Some(JAVA_IMPORTS));
    }

    #[test]
    fn test_unknown_tags() {
        assert!(imports_for("kotlin").is_none());
        assert!(imports_for("").is_none());
        assert!(imports_for("javascript").is_none());
    }
}

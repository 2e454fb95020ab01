use std::fmt::Write;

/// Render `s` as a double-quoted Java string literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        assert_eq!(string_literal("="), r#""=""#);
        assert_eq!(string_literal("::"), r#""::""#);
        assert_eq!(string_literal("-inputFile"), r#""-inputFile""#);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(string_literal(r#"a"b"#), r#""a\"b""#);
        assert_eq!(string_literal(r"a\b"), r#""a\\b""#);
        assert_eq!(string_literal("\t"), r#""\t""#);
        assert_eq!(string_literal("\u{1}"), r#""\u0001""#);
    }
}

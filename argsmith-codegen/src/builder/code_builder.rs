//! Indented line buffer for emitted source text.

/// One indentation step in Java output.
const JAVA_INDENT: &str = "    ";

/// Accumulates lines of source, indenting each by the current block depth.
///
/// # Example
///
/// ```
/// use argsmith_codegen::builder::CodeBuilder;
///
/// let mut b = CodeBuilder::java();
/// b.push_block("class Foo {", "}", |b| {
///     b.push_line("int x;");
/// });
///
/// assert_eq!(b.build(), "class Foo {\n    int x;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    unit: &'static str,
    buffer: String,
}

impl CodeBuilder {
    /// Builder indenting with four spaces per level.
    pub fn java() -> Self {
        Self {
            depth: 0,
            unit: JAVA_INDENT,
            buffer: String::new(),
        }
    }

    /// Append `s` at the current depth.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buffer.push_str(self.unit);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Append an empty line; never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Append `header`, the body written by `f` one level deeper, then `close`.
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header);
        self.depth += 1;
        f(self);
        self.depth -= 1;
        self.push_line(close)
    }

    /// Consume the builder and return the text.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_at_top_level() {
        let mut b = CodeBuilder::java();
        b.push_line("int x = 1;").push_line("int y = 2;");
        assert_eq!(b.build(), "int x = 1;\nint y = 2;\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut b = CodeBuilder::java();
        b.push_block("{", "}", |b| {
            b.push_line("a();").push_blank().push_line("b();");
        });

        assert_eq!(b.build(), "{\n    a();\n\n    b();\n}\n");
    }

    #[test]
    fn test_push_block_nests() {
        let mut b = CodeBuilder::java();
        b.push_block("class A {", "}", |b| {
            b.push_block("void f() {", "}", |b| {
                b.push_line("return;");
            });
        });

        assert_eq!(
            b.build(),
            "class A {\n    void f() {\n        return;\n    }\n}\n"
        );
    }

    #[test]
    fn test_depth_restored_after_block() {
        let mut b = CodeBuilder::java();
        b.push_block("if (a) {", "}", |_| {});
        b.push_line("done();");

        assert_eq!(b.build(), "if (a) {\n}\ndone();\n");
    }
}

//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a plain informational line.
    fn info(&mut self, msg: &str);

    /// Render a success line.
    fn success(&mut self, msg: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render text exactly as given.
    fn raw(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn info(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn raw(&mut self, text: &str) {
        print!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Output;

    /// Records rendered lines for assertions.
    #[derive(Default)]
    pub struct RecordingOutput {
        pub lines: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn section(&mut self, name: &str) {
            self.lines.push(format!("{}:", name));
        }

        fn list_item(&mut self, text: &str) {
            self.lines.push(format!("  - {}", text));
        }

        fn info(&mut self, msg: &str) {
            self.lines.push(msg.to_string());
        }

        fn success(&mut self, msg: &str) {
            self.lines.push(format!("✓ {}", msg));
        }

        fn warning(&mut self, msg: &str) {
            self.lines.push(format!("warning: {}", msg));
        }

        fn divider(&mut self, label: &str) {
            self.lines.push(format!("── {} ──", label));
        }

        fn raw(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }

        fn newline(&mut self) {
            self.lines.push(String::new());
        }
    }
}

//! Line-oriented output shared by every snippet.
//!
//! Snippets never call `println!` directly. They write to a `Console`, which
//! is either the real terminal or a transcript that tests can inspect.

/// A sink for whole lines of output.
pub trait Console {
    fn line(&mut self, text: &str);
}

/// Writes every line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Console for Stdout {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Records lines in memory, in the order they were written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Console for Transcript {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

//! Line cursor over the raw document text.
//!
//! Splits the input into lines up front (normalizing both `\n` and `\r\n`
//! endings) and hands them out sequentially with one line of lookahead.

/// Sequential, peekable access to the document's lines.
#[derive(Debug)]
pub struct Input {
    lines: Vec<String>,
    current: usize,
}

impl Input {
    /// Split `content` into lines. A trailing `\r` is stripped from each
    /// line so CRLF input tokenizes identically to LF input.
    pub fn new(content: &str) -> Self {
        let lines = content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines, current: 0 }
    }

    /// Current line without advancing; `None` at end of input.
    pub fn peek_line(&self) -> Option<&str> {
        self.lines.get(self.current).map(String::as_str)
    }

    /// Current line, advancing one position; `None` at end of input.
    pub fn next_line(&mut self) -> Option<&str> {
        let line = self.lines.get(self.current).map(String::as_str);
        if line.is_some() {
            self.current += 1;
        }
        line
    }

    /// True once every line has been consumed.
    pub fn eof(&self) -> bool {
        self.current == self.lines.len()
    }

    /// Number of lines consumed so far, which is the 1-based number of the
    /// most recently consumed line. Used for diagnostics.
    pub fn line_number(&self) -> usize {
        self.current
    }
}

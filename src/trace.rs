//! Recorded console output
//!
//! Scenarios record what they would print instead of printing directly, so
//! the binaries can replay a run on stdout and the tests can assert the
//! exact lines.

use std::fmt;

/// A recorded sequence of output lines
#[derive(Debug, Clone, Default)]
pub struct Trace {
    lines: Vec<String>,
}

impl Trace {
    pub fn new() -> Self {
        Trace { lines: Vec::new() }
    }

    /// Record one line of output
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// All recorded lines, in order
    pub fn output(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

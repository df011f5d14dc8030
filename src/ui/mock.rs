//! Mock UI implementation for testing.
//!
//! `MockUI` implements the [`UserInterface`] trait and captures every line
//! for later assertion, regardless of output mode.
//!
//! # Example
//!
//! ```
//! use gantry::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Python 3.12.1 - OK");
//! ui.warning("Math service not reachable on port 8000");
//!
//! assert!(ui.successes().iter().any(|m| m.contains("3.12.1")));
//! assert_eq!(ui.warnings().len(), 1);
//! ```

use super::{OutputMode, UserInterface};

/// Captures output lines for assertions in tests.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Captured success lines.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Captured warning lines.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Captured error lines.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }
}

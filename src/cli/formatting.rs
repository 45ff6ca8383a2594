//! Formatting utilities for CLI output.
//!
//! Provides consistent styling for the built-in commands and for the
//! failure message printed when a command cannot be resolved.

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";

    /// Bright red color
    pub const BRIGHT_RED: &'static str = "\x1b[91m";
}

/// Text styling switch shared by everything that renders CLI output.
///
/// With color disabled every method returns its input unchanged, which
/// keeps output stable for pipes and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Style {
    /// Creates a style that emits ANSI codes only when `color` is set.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Style without any ANSI codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Whether ANSI codes are emitted.
    pub fn is_colored(&self) -> bool {
        self.color
    }

    /// Formats section headers with styling
    pub fn header(&self, text: &str) -> String {
        self.paint(&[Colors::BOLD, Colors::CYAN], text)
    }

    /// Formats subheaders with styling
    pub fn subheader(&self, text: &str) -> String {
        self.paint(&[Colors::BOLD, Colors::YELLOW], text)
    }

    /// Formats command names with styling
    pub fn command(&self, text: &str) -> String {
        self.paint(&[Colors::BOLD, Colors::GREEN], text)
    }

    /// Formats descriptions with muted styling
    pub fn description(&self, text: &str) -> String {
        self.paint(&[Colors::DIM], text)
    }

    /// Formats error messages with red styling
    pub fn error(&self, text: &str) -> String {
        self.paint(&[Colors::BOLD, Colors::BRIGHT_RED], text)
    }

    fn paint(&self, codes: &[&str], text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("{}{}{}", codes.concat(), text, Colors::RESET)
    }
}

use serde::{Deserialize, Serialize};

use crate::cli::formatting::Style;

/// Settings for console output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsoleConfig {
    /// Emit ANSI colors in built-in command output and error messages.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl ConsoleConfig {
    /// Output style matching these settings.
    pub fn style(&self) -> Style {
        Style::new(self.color)
    }
}

fn default_color() -> bool {
    true
}

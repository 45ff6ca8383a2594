//! Configuration schema and loading.
//!
//! Settings are read from `config.toml` in the shellfront config directory.
//! Every field has a default, so a missing file or a partial file is valid.
//! Configuration only affects logging and output styling; the command-line
//! grammar is fixed.

mod console;
mod general;
mod loading;
mod paths;

pub use console::ConsoleConfig;
pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;

use serde::{Deserialize, Serialize};

/// Main configuration structure for shellfront.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Console output settings.
    #[serde(default)]
    pub console: ConsoleConfig,
}

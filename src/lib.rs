//! Shellfront - command-line parsing and dispatch.
//!
//! Turns a raw command line, either a process argument vector or a single
//! string, into a command name, options and positional arguments, then runs
//! the matching registered command.
//!
//! # Quick Start
//!
//! ```rust
//! use shellfront::cli::{Console, formatting::Style};
//!
//! let mut console = Console::new(Style::plain());
//! let output = console.exec("help").unwrap();
//! assert!(output.starts_with("Usage"));
//!
//! let error = console.exec("deploy --force").unwrap_err();
//! assert_eq!(error.missing_command(), Some("deploy"));
//! ```

/// Tokenizer, classifier, command registry and dispatcher.
pub mod cli;

/// Configuration schema and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Logging setup.
pub mod tracing_config;

pub use crate::core::{Result, ShellfrontError};

//! Command-line parsing and dispatch.
//!
//! A raw line goes through [`tokenize`], a token vector through
//! [`Invocation::classify`], and the resulting invocation is resolved
//! against a [`CommandRegistry`] and run by the [`Console`].

pub mod commands;
mod console;
pub mod formatting;
mod parser;
mod registry;
mod tokenizer;
mod types;

pub use console::{Console, Phase};
pub use parser::{Invocation, OptionValue};
pub use registry::CommandRegistry;
pub use tokenizer::tokenize;
pub use types::{CliError, Command, CommandContext, CommandMetadata, CommandResult};

#[cfg(test)]
mod tests;

use thiserror::Error;

use super::{CommandRegistry, Invocation, formatting::Style};

/// Errors that can occur during CLI command resolution and execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// No active command is registered under the requested name.
    ///
    /// Carries the name exactly as it was requested so the caller can
    /// report it back to the user.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned by command handlers when the positional arguments or
    /// option values don't fit what the command expects.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A command failed while running.
    #[error("Execution failed: {0}")]
    Execution(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CliError {
    /// The unresolved command name, if this is a [`CliError::CommandNotFound`].
    pub fn missing_command(&self) -> Option<&str> {
        match self {
            CliError::CommandNotFound(name) => Some(name),
            _ => None,
        }
    }
}

/// Type alias for command execution results.
///
/// Commands return their output as a String; the caller decides where it
/// goes.
pub type CommandResult = Result<String, CliError>;

/// Descriptive metadata for a command, used for listing and help output.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name the registry binds it under (e.g., "index", "help").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Usage line shown by `help <command>`.
    pub usage: String,
}

/// Everything a command sees while it runs.
pub struct CommandContext<'a> {
    /// The classified command line that selected this command.
    pub invocation: &'a Invocation,

    /// The registry the command was resolved from.
    pub registry: &'a CommandRegistry,

    /// Output styling configured for this console.
    pub style: Style,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors and the
/// parsed command line through [`CommandContext`].
pub trait Command: Send + Sync {
    /// Runs the command.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for any execution failure, typically
    /// `CliError::InvalidArguments` or `CliError::Execution`.
    fn execute(&self, ctx: &CommandContext<'_>) -> CommandResult;

    /// Returns the metadata for this command.
    fn metadata(&self) -> CommandMetadata;

    /// Name the command is registered under.
    fn name(&self) -> String {
        self.metadata().name
    }

    /// Whether the command can currently be resolved and listed.
    ///
    /// Evaluated on every lookup, never cached.
    fn is_active(&self) -> bool {
        true
    }
}

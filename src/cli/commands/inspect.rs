use crate::cli::{CliError, Command, CommandContext, CommandResult, types::CommandMetadata};

/// Prints the classified command line as JSON.
///
/// Useful for checking how a line is split into options and arguments.
///
/// # Example Usage
///
/// ```bash
/// shellfront inspect -la --format=json -- -x file
/// ```
#[derive(Debug, Default)]
pub struct InspectCommand;

impl InspectCommand {
    /// Creates the inspect command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for InspectCommand {
    fn execute(&self, ctx: &CommandContext<'_>) -> CommandResult {
        serde_json::to_string_pretty(ctx.invocation)
            .map_err(|e| CliError::Execution(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "inspect".to_string(),
            description: "Show how the command line was parsed".to_string(),
            usage: "inspect [options] [arguments]".to_string(),
        }
    }
}

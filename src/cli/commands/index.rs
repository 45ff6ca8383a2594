use crate::cli::{Command, CommandContext, CommandResult, types::CommandMetadata};

use super::{HELP, INDEX};

/// Default command: lists every active command with its description.
///
/// # Example Usage
///
/// ```bash
/// shellfront
/// shellfront index
/// ```
#[derive(Debug, Default)]
pub struct IndexCommand;

impl IndexCommand {
    /// Creates the index command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for IndexCommand {
    fn execute(&self, ctx: &CommandContext<'_>) -> CommandResult {
        let style = ctx.style;
        let commands = ctx.registry.list();
        let width = commands
            .iter()
            .map(|command| command.name().len())
            .max()
            .unwrap_or_default();

        let mut output = style.header("Commands");
        output.push('\n');

        for command in commands {
            let metadata = command.metadata();
            let padding = " ".repeat(width.saturating_sub(metadata.name.len()));
            output.push_str(&format!(
                "  {}{}  {}\n",
                style.command(&metadata.name),
                padding,
                style.description(&metadata.description)
            ));
        }

        output.push('\n');
        output.push_str(&style.description(&format!(
            "Run '{HELP} <command>' for details about a command."
        )));

        Ok(output)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: INDEX.to_string(),
            description: "List available commands".to_string(),
            usage: INDEX.to_string(),
        }
    }
}

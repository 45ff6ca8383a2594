use crate::cli::{CliError, Command, CommandContext, CommandResult, types::CommandMetadata};

use super::HELP;

const SYNOPSIS: &[&str] = &[
    "[command] [options] [arguments] [options]",
    "[command] [options] -- [arguments]",
];

const OPTION_FORMS: &[(&str, &str)] = &[
    ("-x, -xyz", "short flags, one per character"),
    ("--name", "long flag"),
    ("--name=value", "long option with a value"),
    ("--", "treat everything after it as arguments"),
];

/// Explains the command-line grammar, or the usage of one command.
///
/// # Example Usage
///
/// ```bash
/// shellfront help
/// shellfront help index
/// ```
#[derive(Debug, Default)]
pub struct HelpCommand;

impl HelpCommand {
    /// Creates the help command.
    pub fn new() -> Self {
        Self
    }

    fn general_help(ctx: &CommandContext<'_>) -> String {
        let style = ctx.style;
        let mut output = style.header("Usage");
        output.push('\n');
        for line in SYNOPSIS {
            output.push_str(&format!("  {line}\n"));
        }

        output.push('\n');
        output.push_str(&style.subheader("Options"));
        output.push('\n');
        for (form, description) in OPTION_FORMS {
            output.push_str(&format!(
                "  {:<14}{}\n",
                form,
                style.description(description)
            ));
        }

        output.trim_end().to_string()
    }
}

impl Command for HelpCommand {
    /// Prints general usage, or details for the command named by the
    /// first argument.
    ///
    /// # Errors
    ///
    /// * `CliError::CommandNotFound` - If the named command is not active
    fn execute(&self, ctx: &CommandContext<'_>) -> CommandResult {
        let Some(name) = ctx.invocation.argument(0) else {
            return Ok(Self::general_help(ctx));
        };

        let command = ctx
            .registry
            .get(name)
            .ok_or_else(|| CliError::CommandNotFound(name.to_string()))?;
        let metadata = command.metadata();

        Ok(format!(
            "{}\n  {}\n\n{}\n  {}",
            ctx.style.command(&metadata.name),
            ctx.style.description(&metadata.description),
            ctx.style.subheader("Usage"),
            metadata.usage
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: HELP.to_string(),
            description: "Show command-line usage".to_string(),
            usage: format!("{HELP} [command]"),
        }
    }
}

//! Shellfront entry point - parses the process arguments and runs the
//! resolved command.

use std::process;

use shellfront::{
    cli::{CliError, Console, commands::InspectCommand},
    config::Config,
    tracing_config,
};
use tracing::error;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_config::init(config.general.log_level)?;

    let args: Vec<String> = std::env::args().collect();
    let style = config.console.style();

    let mut console = Console::with_args(style, &args);
    console.add_command(Box::new(InspectCommand::new()));

    match console.run() {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
        }
        Err(CliError::CommandNotFound(name)) => {
            eprintln!("{}", style.error(&format!("Command \"{name}\" not found")));
            process::exit(1);
        }
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("{}: {}", style.error("Error"), e);
            process::exit(1);
        }
    }

    Ok(())
}

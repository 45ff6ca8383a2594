use std::collections::BTreeMap;

use tracing::{debug, info, instrument, warn};

use super::{
    CliError, Command, CommandContext, CommandRegistry, CommandResult, Invocation, OptionValue,
    commands::{self, HelpCommand, IndexCommand},
    formatting::Style,
    tokenize,
};

/// Placeholder standing in for the program name when re-parsing a string.
const PROGRAM_PLACEHOLDER: &str = "removed";

/// Where the console is in its parse and dispatch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing parsed yet.
    Idle,
    /// Previous command, options and arguments were cleared.
    Reset,
    /// A command line was classified.
    Parsed,
    /// A command name was settled on, explicitly or by defaulting to `index`.
    Resolved,
    /// The resolved command was run.
    Dispatched,
    /// No active command matched the resolved name.
    Unresolved,
}

/// Command-line front end: holds the registered commands and the
/// currently parsed invocation, and dispatches one to the other.
///
/// The console never reads process state itself. Callers hand it an
/// argument vector through [`prepare`](Self::prepare) or a raw line
/// through [`exec`](Self::exec).
pub struct Console {
    registry: CommandRegistry,
    invocation: Invocation,
    phase: Phase,
    style: Style,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

impl Console {
    /// Creates a console with an empty registry and nothing parsed.
    pub fn new(style: Style) -> Self {
        Self {
            registry: CommandRegistry::new(),
            invocation: Invocation::default(),
            phase: Phase::Idle,
            style,
        }
    }

    /// Creates a console and parses `argv`, whose first entry is the program path.
    pub fn with_args<S: AsRef<str>>(style: Style, argv: &[S]) -> Self {
        let mut console = Self::new(style);
        console.prepare(argv);
        console
    }

    /// Registers a command, replacing any command with the same name.
    pub fn add_command(&mut self, command: Box<dyn Command>) -> &mut Self {
        self.registry.register(command);
        self
    }

    /// Registers many commands in order; later entries win on name collisions.
    pub fn add_commands<I>(&mut self, commands: I) -> &mut Self
    where
        I: IntoIterator<Item = Box<dyn Command>>,
    {
        self.registry.register_many(commands);
        self
    }

    /// Returns the active command bound to `name`.
    pub fn command(&self, name: &str) -> Option<&dyn Command> {
        self.registry.get(name)
    }

    /// Active commands sorted by name.
    pub fn commands(&self) -> Vec<&dyn Command> {
        self.registry.list()
    }

    /// The underlying registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Name of the current command, empty until one is parsed or defaulted.
    pub fn command_name(&self) -> &str {
        &self.invocation.command
    }

    /// All parsed options.
    pub fn options(&self) -> &BTreeMap<String, OptionValue> {
        &self.invocation.options
    }

    /// A single parsed option.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.invocation.option(name)
    }

    /// All positional arguments.
    pub fn arguments(&self) -> &[String] {
        &self.invocation.arguments
    }

    /// A single positional argument.
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.invocation.argument(index)
    }

    /// The full current invocation.
    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    /// Current position in the parse and dispatch cycle.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Output styling handed to commands.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Clears the current command, options and arguments.
    pub fn reset(&mut self) {
        self.invocation = Invocation::default();
        self.phase = Phase::Reset;
    }

    /// Parses an argument vector whose first entry is the program path.
    ///
    /// Any previously parsed state is discarded first.
    pub fn prepare<S: AsRef<str>>(&mut self, argv: &[S]) {
        self.reset();
        self.invocation = Invocation::from_argv(argv);
        self.phase = Phase::Parsed;
    }

    /// Registers the built-in `index` and `help` commands where no binding
    /// exists under those names. Safe to call repeatedly.
    pub fn ensure_defaults(&mut self) {
        if !self.registry.contains(commands::INDEX) {
            debug!("registering built-in index command");
            self.registry.register(Box::new(IndexCommand::new()));
        }
        if !self.registry.contains(commands::HELP) {
            debug!("registering built-in help command");
            self.registry.register(Box::new(HelpCommand::new()));
        }
    }

    /// Resolves the current invocation to a command and runs it.
    ///
    /// An empty command name resolves to `index`.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` carrying the requested name if no
    /// active command is bound to it. Errors from the command itself are
    /// passed through unchanged.
    #[instrument(skip(self), fields(command = %self.invocation.command))]
    pub fn run(&mut self) -> CommandResult {
        self.ensure_defaults();

        if self.invocation.command.is_empty() {
            self.invocation.command = commands::INDEX.to_string();
        }
        self.phase = Phase::Resolved;

        let Some(command) = self.registry.get(&self.invocation.command) else {
            warn!(command = %self.invocation.command, "command not found");
            self.phase = Phase::Unresolved;
            return Err(CliError::CommandNotFound(self.invocation.command.clone()));
        };

        info!(command = %self.invocation.command, "dispatching command");
        let ctx = CommandContext {
            invocation: &self.invocation,
            registry: &self.registry,
            style: self.style,
        };
        let result = command.execute(&ctx);
        self.phase = Phase::Dispatched;

        result
    }

    /// Tokenizes and parses a raw command line, then runs it.
    ///
    /// The line holds no program name: every token is classified. State from
    /// earlier calls is fully replaced.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    #[instrument(skip(self))]
    pub fn exec(&mut self, command_line: &str) -> CommandResult {
        let mut argv = tokenize(command_line);
        argv.insert(0, PROGRAM_PLACEHOLDER.to_string());
        self.prepare(&argv);
        self.run()
    }
}

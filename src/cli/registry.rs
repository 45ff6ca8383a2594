use std::collections::HashMap;

use tracing::debug;

use super::Command;

/// Registry of named CLI commands.
///
/// Bindings are unique by name. A binding whose command reports itself
/// inactive stays stored but is invisible to [`get`](Self::get) and
/// [`list`](Self::list).
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command under its name.
    ///
    /// If a command with the same name already exists, it is replaced.
    pub fn register(&mut self, command: Box<dyn Command>) {
        let name = command.name();
        if self.commands.insert(name.clone(), command).is_some() {
            debug!(command = %name, "replaced existing command binding");
        }
    }

    /// Registers each command in order; later entries win on name collisions.
    pub fn register_many<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = Box<dyn Command>>,
    {
        for command in commands {
            self.register(command);
        }
    }

    /// Returns the command bound to `name` if it is currently active.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .get(name)
            .map(|command| &**command)
            .filter(|command| command.is_active())
    }

    /// Returns `true` if any command, active or not, is bound to `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Lists all active commands sorted by name.
    pub fn list(&self) -> Vec<&dyn Command> {
        let mut active: Vec<(&String, &dyn Command)> = self
            .commands
            .iter()
            .map(|(name, command)| (name, &**command))
            .filter(|(_, command)| command.is_active())
            .collect();

        active.sort_by(|(a, _), (b, _)| a.cmp(b));

        active.into_iter().map(|(_, command)| command).collect()
    }
}

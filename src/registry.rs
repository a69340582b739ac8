use crate::builtin::{Add, Div, Equals, Error, Mul, Not, Pow, Print, Stop, Sub, Warn};
use crate::command::{Command, CommandId};
use std::collections::HashMap;

/// Read-only table from command identifier to its handler.
///
/// Built once, before any program runs, and shared by reference with every
/// evaluation pass.
#[derive(Debug, Clone)]
pub struct Registry {
    commands: HashMap<CommandId, Command>,
}

impl Registry {
    /// An empty registry. Every name is unknown until registered.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Add a command, replacing any previous entry with the same identifier.
    pub fn register(&mut self, command: Command) {
        self.commands.insert(command.id, command);
    }

    pub fn get(&self, id: CommandId) -> Option<&Command> {
        self.commands.get(&id)
    }

    /// Find a command by the name a script uses for it.
    pub fn lookup(&self, name: &str) -> Option<&Command> {
        name.parse::<CommandId>().ok().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for Registry {
    /// The full builtin set: `print`, `warn`, `error`, `stop`, `add`, `sub`,
    /// `mul`, `div`, `pow`, `equals`, `not`.
    fn default() -> Self {
        let mut registry = Self::new();
        for command in [
            Command::builtin::<Print>(),
            Command::builtin::<Warn>(),
            Command::builtin::<Error>(),
            Command::builtin::<Stop>(),
            Command::builtin::<Add>(),
            Command::builtin::<Sub>(),
            Command::builtin::<Mul>(),
            Command::builtin::<Div>(),
            Command::builtin::<Pow>(),
            Command::builtin::<Equals>(),
            Command::builtin::<Not>(),
        ] {
            registry.register(command);
        }
        registry
    }
}

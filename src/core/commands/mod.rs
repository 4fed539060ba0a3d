mod cd;
mod exit;
mod help;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;

use super::streams::Streams;

/// Whether the shell loop should read another line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSignal {
    Continue,
    Stop,
}

pub trait Command {
    /// `args[0]` is the command name itself.
    fn execute(
        &self,
        args: &[&str],
        builtins: &BuiltinRegistry,
        io: &mut Streams<'_>,
    ) -> ExitSignal;
}

#[derive(Debug, Clone)]
pub enum CommandType {
    Cd(CdCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[&str],
        builtins: &BuiltinRegistry,
        io: &mut Streams<'_>,
    ) -> ExitSignal {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, builtins, io),
            CommandType::Help(cmd) => cmd.execute(args, builtins, io),
            CommandType::Exit(cmd) => cmd.execute(args, builtins, io),
        }
    }
}

/// Builtin commands in registration order. Built once, never modified.
#[derive(Debug, Clone)]
pub struct BuiltinRegistry {
    commands: Vec<(&'static str, CommandType)>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self::from_commands(vec![
            ("cd", CommandType::Cd(CdCommand::new())),
            ("help", CommandType::Help(HelpCommand::new())),
            ("exit", CommandType::Exit(ExitCommand::new())),
        ])
    }

    pub fn from_commands(commands: Vec<(&'static str, CommandType)>) -> Self {
        Self { commands }
    }

    /// Exact, case-sensitive match; the first registration wins.
    pub fn get(&self, name: &str) -> Option<&CommandType> {
        self.commands
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, command)| command)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|(name, _)| *name)
    }
}

use super::{BuiltinRegistry, Command, ExitSignal};
use crate::core::streams::Streams;

#[derive(Debug, Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(
        &self,
        _args: &[&str],
        _builtins: &BuiltinRegistry,
        _io: &mut Streams<'_>,
    ) -> ExitSignal {
        ExitSignal::Stop
    }
}

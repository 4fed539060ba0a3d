use super::{BuiltinRegistry, Command, ExitSignal};
use crate::core::streams::Streams;
use std::env;

#[derive(Debug, Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[&str],
        _builtins: &BuiltinRegistry,
        io: &mut Streams<'_>,
    ) -> ExitSignal {
        match args.get(1) {
            None => io.report("expected argument to \"cd\""),
            Some(path) => {
                if let Err(e) = env::set_current_dir(path) {
                    io.report(format!("cd: {}", e));
                }
            }
        }
        ExitSignal::Continue
    }
}

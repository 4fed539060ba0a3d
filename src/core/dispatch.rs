use tracing::debug;

use super::commands::{BuiltinRegistry, Command, ExitSignal};
use super::streams::Streams;
use crate::process::{Launcher, ProcessApi};

/// Routes a token list to a builtin, or to the launcher when none matches.
pub struct Dispatcher<'a, P> {
    builtins: &'a BuiltinRegistry,
    launcher: &'a Launcher<P>,
}

impl<'a, P: ProcessApi> Dispatcher<'a, P> {
    pub fn new(builtins: &'a BuiltinRegistry, launcher: &'a Launcher<P>) -> Self {
        Self { builtins, launcher }
    }

    pub fn execute(&self, tokens: &[&str], io: &mut Streams<'_>) -> ExitSignal {
        let Some(&name) = tokens.first() else {
            return ExitSignal::Continue;
        };

        match self.builtins.get(name) {
            Some(command) => {
                debug!(name, "running builtin");
                command.execute(tokens, self.builtins, io)
            }
            None => {
                debug!(name, "launching external program");
                self.launcher.launch(tokens, io)
            }
        }
    }
}

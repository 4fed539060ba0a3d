use std::io::{self, Write};

use super::{BuiltinRegistry, Command, ExitSignal};
use crate::core::streams::Streams;

#[derive(Debug, Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }

    fn write_banner(builtins: &BuiltinRegistry, io: &mut Streams<'_>) -> io::Result<()> {
        let heading = format!("LSH {}", env!("CARGO_PKG_VERSION"));
        writeln!(io.out, "{}", io.painter.heading(&heading))?;
        writeln!(io.out, "Type program names and arguments, and hit enter.")?;
        writeln!(io.out, "The following are built in:")?;
        for name in builtins.names() {
            writeln!(io.out, "  {}", name)?;
        }
        writeln!(io.out, "Use the man command for information on other programs.")?;
        io.out.flush()
    }
}

impl Command for HelpCommand {
    fn execute(
        &self,
        _args: &[&str],
        builtins: &BuiltinRegistry,
        io: &mut Streams<'_>,
    ) -> ExitSignal {
        if let Err(e) = Self::write_banner(builtins, io) {
            io.report(format!("help: {}", e));
        }
        ExitSignal::Continue
    }
}

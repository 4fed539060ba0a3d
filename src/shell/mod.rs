use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    core::{
        commands::{BuiltinRegistry, ExitSignal},
        config::Config,
        dispatch::Dispatcher,
        streams::Streams,
    },
    error::ShellError,
    highlight::Painter,
    input::{split_line, LineReader, ReadOutcome},
    process::{Launcher, ProcessApi},
};

/// Why the loop ended without an error. Both mean a successful exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    EndOfInput,
    Exit,
}

pub struct Shell<R, O, E, P> {
    config: Config,
    reader: LineReader<R>,
    out: O,
    err: E,
    painter: Painter,
    launcher: Launcher<P>,
}

impl<R: BufRead, O: Write, E: Write, P: ProcessApi> Shell<R, O, E, P> {
    pub fn new(config: Config, input: R, out: O, err: E, process: P) -> Self {
        Self {
            config,
            reader: LineReader::new(input),
            out,
            err,
            painter: Painter::plain(),
            launcher: Launcher::new(process),
        }
    }

    pub fn with_painter(mut self, painter: Painter) -> Self {
        self.painter = painter;
        self
    }

    pub fn run(&mut self) -> Result<Termination, ShellError> {
        let builtins = BuiltinRegistry::new();
        let dispatcher = Dispatcher::new(&builtins, &self.launcher);

        loop {
            if self.config.show_prompt {
                let written = write!(self.out, "{}", self.config.prompt);
                if let Err(e) = written.and_then(|_| self.out.flush()) {
                    debug!("failed to write prompt: {}", e);
                }
            }

            let line = match self.reader.read_line()? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::EndOfInput => {
                    debug!("end of input");
                    return Ok(Termination::EndOfInput);
                }
            };

            let tokens = split_line(line.as_str())?;
            let mut io = Streams::new(&mut self.out, &mut self.err).with_painter(self.painter);
            if dispatcher.execute(tokens.as_slice(), &mut io) == ExitSignal::Stop {
                debug!("exit requested");
                return Ok(Termination::Exit);
            }
        }
    }

    pub fn output(&self) -> &O {
        &self.out
    }

    pub fn errors(&self) -> &E {
        &self.err
    }

    pub fn process(&self) -> &P {
        self.launcher.process()
    }
}

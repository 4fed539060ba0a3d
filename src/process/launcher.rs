use tracing::debug;

use super::{ArgVector, ChildStatus, Fork, Pid, ProcessApi, ProcessError, EXIT_FAILURE};
use crate::core::commands::ExitSignal;
use crate::core::streams::Streams;

/// Runs external programs one at a time, blocking until each is done.
pub struct Launcher<P> {
    process: P,
}

impl<P: ProcessApi> Launcher<P> {
    pub fn new(process: P) -> Self {
        Self { process }
    }

    pub fn process(&self) -> &P {
        &self.process
    }

    /// Always continues, whatever happened to the program.
    pub fn launch(&self, args: &[&str], io: &mut Streams<'_>) -> ExitSignal {
        let argv = match ArgVector::new(args) {
            Ok(argv) => argv,
            Err(e) => {
                io.report(e);
                return ExitSignal::Continue;
            }
        };

        // anything still buffered would be written twice after the fork
        io.flush();

        match self.process.create_child() {
            Err(e) => io.report(e),
            Ok(Fork::Child) => {
                let source = self.process.replace_program(&argv);
                io.report(ProcessError::Exec {
                    program: args.first().copied().unwrap_or_default().to_string(),
                    source,
                });
                self.process.exit_child(EXIT_FAILURE)
            }
            Ok(Fork::Parent(pid)) => {
                debug!(pid, program = args.first().copied(), "child started");
                self.wait(pid, io);
            }
        }

        ExitSignal::Continue
    }

    fn wait(&self, pid: Pid, io: &mut Streams<'_>) {
        loop {
            match self.process.wait_for_child(pid) {
                Ok(ChildStatus::Exited(code)) => {
                    debug!(pid, code, "child exited");
                    return;
                }
                Ok(ChildStatus::Signaled(signal)) => {
                    debug!(pid, signal, "child killed by signal");
                    return;
                }
                Ok(status) => debug!(pid, ?status, "child not finished, waiting again"),
                Err(e) => {
                    io.report(e);
                    return;
                }
            }
        }
    }
}

use std::fmt;
use std::io;

mod argv;
#[cfg(test)]
pub(crate) mod fake;
pub mod launcher;
pub mod unix;

pub use argv::ArgVector;
pub use launcher::Launcher;
pub use unix::UnixProcess;

pub type Pid = libc::pid_t;

/// Status used by a child whose program could not be replaced.
pub const EXIT_FAILURE: i32 = libc::EXIT_FAILURE;

#[derive(Debug)]
pub enum ProcessError {
    Fork(io::Error),
    Exec { program: String, source: io::Error },
    Wait(io::Error),
    InvalidArgument(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Fork(e) => write!(f, "fork: {}", e),
            ProcessError::Exec { program, source } => write!(f, "{}: {}", program, source),
            ProcessError::Wait(e) => write!(f, "wait: {}", e),
            ProcessError::InvalidArgument(program) => {
                write!(f, "{}: argument contains a nul byte", program)
            }
        }
    }
}

impl std::error::Error for ProcessError {}

/// Which side of a `create_child` call the caller is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fork {
    Parent(Pid),
    Child,
}

/// A state change reported for a waited-on child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    Exited(i32),
    Signaled(i32),
    Stopped(i32),
    Continued,
}

impl ChildStatus {
    pub fn from_raw(status: libc::c_int) -> Self {
        if libc::WIFEXITED(status) {
            ChildStatus::Exited(libc::WEXITSTATUS(status))
        } else if libc::WIFSIGNALED(status) {
            ChildStatus::Signaled(libc::WTERMSIG(status))
        } else if libc::WIFSTOPPED(status) {
            ChildStatus::Stopped(libc::WSTOPSIG(status))
        } else {
            ChildStatus::Continued
        }
    }

    /// Exited or killed; stops and resumes are not terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ChildStatus::Exited(_) | ChildStatus::Signaled(_))
    }
}

/// The operating-system process primitives the launcher is built on.
pub trait ProcessApi {
    /// Duplicates the calling process.
    fn create_child(&self) -> Result<Fork, ProcessError>;

    /// Replaces the running program with `argv`. Only returns on failure.
    fn replace_program(&self, argv: &ArgVector) -> io::Error;

    /// Blocks until `pid` changes state.
    fn wait_for_child(&self, pid: Pid) -> Result<ChildStatus, ProcessError>;

    /// Ends a child that could not be replaced, skipping the parent's cleanup.
    fn exit_child(&self, code: i32) -> !;
}

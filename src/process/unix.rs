use std::io;

use super::{ArgVector, ChildStatus, Fork, Pid, ProcessApi, ProcessError};

/// `fork`, `execvp` and `waitpid` from the host C library.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixProcess;

impl ProcessApi for UnixProcess {
    fn create_child(&self) -> Result<Fork, ProcessError> {
        match unsafe { libc::fork() } {
            -1 => Err(ProcessError::Fork(io::Error::last_os_error())),
            0 => Ok(Fork::Child),
            pid => Ok(Fork::Parent(pid)),
        }
    }

    fn replace_program(&self, argv: &ArgVector) -> io::Error {
        let Some(program) = argv.program() else {
            return io::Error::from_raw_os_error(libc::ENOENT);
        };
        unsafe {
            libc::execvp(program.as_ptr(), argv.as_ptr());
        }
        io::Error::last_os_error()
    }

    fn wait_for_child(&self, pid: Pid) -> Result<ChildStatus, ProcessError> {
        let mut status: libc::c_int = 0;
        loop {
            let rc = unsafe { libc::waitpid(pid, &mut status, libc::WUNTRACED) };
            if rc != -1 {
                return Ok(ChildStatus::from_raw(status));
            }
            let err = io::Error::last_os_error();
            if err.kind() != io::ErrorKind::Interrupted {
                return Err(ProcessError::Wait(err));
            }
        }
    }

    fn exit_child(&self, code: i32) -> ! {
        unsafe { libc::_exit(code) }
    }
}

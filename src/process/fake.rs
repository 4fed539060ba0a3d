use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;

use super::{ArgVector, ChildStatus, Fork, Pid, ProcessApi, ProcessError};

pub(crate) const FAKE_PID: Pid = 4242;

enum ForkPlan {
    Parent,
    Child,
    Fail(i32),
}

/// Scripted stand-in for the OS process calls.
pub(crate) struct FakeProcess {
    plan: ForkPlan,
    statuses: RefCell<VecDeque<Result<ChildStatus, i32>>>,
    pub forks: Cell<usize>,
    pub waits: Cell<usize>,
    pub execs: RefCell<Vec<Vec<String>>>,
}

impl FakeProcess {
    fn with_plan(plan: ForkPlan, statuses: Vec<Result<ChildStatus, i32>>) -> Self {
        Self {
            plan,
            statuses: RefCell::new(statuses.into()),
            forks: Cell::new(0),
            waits: Cell::new(0),
            execs: RefCell::new(Vec::new()),
        }
    }

    /// Acts as the parent; each wait returns the next status, then `Exited(0)`.
    pub fn parent(statuses: Vec<ChildStatus>) -> Self {
        Self::with_plan(ForkPlan::Parent, statuses.into_iter().map(Ok).collect())
    }

    pub fn failing_wait(errno: i32) -> Self {
        Self::with_plan(ForkPlan::Parent, vec![Err(errno)])
    }

    /// Acts as a child whose program can never be found.
    pub fn child() -> Self {
        Self::with_plan(ForkPlan::Child, Vec::new())
    }

    pub fn failing_fork(errno: i32) -> Self {
        Self::with_plan(ForkPlan::Fail(errno), Vec::new())
    }
}

impl ProcessApi for FakeProcess {
    fn create_child(&self) -> Result<Fork, ProcessError> {
        self.forks.set(self.forks.get() + 1);
        match self.plan {
            ForkPlan::Parent => Ok(Fork::Parent(FAKE_PID)),
            ForkPlan::Child => Ok(Fork::Child),
            ForkPlan::Fail(errno) => Err(ProcessError::Fork(io::Error::from_raw_os_error(errno))),
        }
    }

    fn replace_program(&self, argv: &ArgVector) -> io::Error {
        let args = argv
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        self.execs.borrow_mut().push(args);
        io::Error::from_raw_os_error(libc::ENOENT)
    }

    fn wait_for_child(&self, pid: Pid) -> Result<ChildStatus, ProcessError> {
        assert_eq!(pid, FAKE_PID);
        self.waits.set(self.waits.get() + 1);
        match self.statuses.borrow_mut().pop_front() {
            Some(Ok(status)) => Ok(status),
            Some(Err(errno)) => Err(ProcessError::Wait(io::Error::from_raw_os_error(errno))),
            None => Ok(ChildStatus::Exited(0)),
        }
    }

    fn exit_child(&self, code: i32) -> ! {
        panic!("child exited with status {}", code)
    }
}

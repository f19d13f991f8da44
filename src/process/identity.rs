use nix::unistd::{Pid, getpid, getppid};

/// Answers "who am I, and who spawned me?".
pub trait ProcessIdentity {
    fn pid(&self) -> Pid;
    fn parent_pid(&self) -> Pid;
}

impl<T: ProcessIdentity + ?Sized> ProcessIdentity for &T {
    fn pid(&self) -> Pid {
        (**self).pid()
    }

    fn parent_pid(&self) -> Pid {
        (**self).parent_pid()
    }
}

/// Reads the identifiers of the running process from the OS.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostProcess;

impl ProcessIdentity for HostProcess {
    fn pid(&self) -> Pid {
        getpid()
    }

    fn parent_pid(&self) -> Pid {
        getppid()
    }
}

/// Fixed identifiers, for callers that want deterministic output.
#[derive(Clone, Copy, Debug)]
pub struct StaticIdentity {
    pub pid: Pid,
    pub parent_pid: Pid,
}

impl StaticIdentity {
    pub fn new(pid: i32, parent_pid: i32) -> Self {
        StaticIdentity {
            pid: Pid::from_raw(pid),
            parent_pid: Pid::from_raw(parent_pid),
        }
    }
}

impl ProcessIdentity for StaticIdentity {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn parent_pid(&self) -> Pid {
        self.parent_pid
    }
}

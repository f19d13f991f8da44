use nix::unistd::Pid;
use tracing::trace;

use crate::sink::{InfoSink, TracingSink};

mod identity;

pub use identity::{HostProcess, ProcessIdentity, StaticIdentity};

pub fn parent_pid_message(pid: Pid) -> String {
    format!("Parent PID:  {}", pid)
}

pub fn current_pid_message(pid: Pid) -> String {
    format!("Current PID: {}", pid)
}

/// Emit the parent and current PIDs to `sink`, parent first.
///
/// Exactly two records are written per call. The sink is used as-is.
pub fn debug_pid_with<I, S>(identity: I, sink: S)
where
    I: ProcessIdentity,
    S: InfoSink,
{
    let parent = identity.parent_pid();
    sink.info(&parent_pid_message(parent));

    let current = identity.pid();
    sink.info(&current_pid_message(current));

    trace!("reported pids (parent {}, current {})", parent, current);
}

/// Log the PIDs of this process and its parent through `tracing`.
pub fn debug_pid() {
    debug_pid_with(HostProcess, TracingSink);
}

/// SIGTERM delivery and outcome classification.
use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

/// What happened when the termination signal was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermOutcome {
    /// The process existed and received SIGTERM.
    Terminated,
    /// The process was already gone (ESRCH). Treated as success by callers.
    AlreadyGone,
    /// The operating system refused the signal (EPERM).
    PermissionDenied,
}

/// An errno outside the expected set (ESRCH, EPERM).
#[derive(Debug)]
pub struct TermError {
    pub pid: i32,
    pub source: Errno,
}

impl std::fmt::Display for TermError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to signal process {}: {}", self.pid, self.source)
    }
}

impl std::error::Error for TermError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Send SIGTERM to the given PID. Fire-and-forget: the caller does not wait
/// for the target to actually exit.
pub fn send_term(pid: i32) -> Result<TermOutcome, TermError> {
    match kill(Pid::from_raw(pid), Signal::SIGTERM) {
        Ok(()) => Ok(TermOutcome::Terminated),
        Err(Errno::ESRCH) => Ok(TermOutcome::AlreadyGone),
        Err(Errno::EPERM) => Ok(TermOutcome::PermissionDenied),
        Err(e) => Err(TermError { pid, source: e }),
    }
}

/// Orchestration of the recycle sequence: enumerate, scan, signal, and
/// (restart variant) relaunch.
///
/// Two entry points, one per binary. They share the scan and signal phases
/// but differ on whether an enumeration failure is fatal and whether a
/// replacement process is started afterwards.
use crate::config::RecyclerConfig;
use crate::listing::ProcessLister;
use crate::relaunch::{relaunch, RelaunchOutcome};
use crate::scan::find_target;
use crate::terminate::{send_term, TermOutcome};

/// Kill-only variant: find the target and send SIGTERM.
///
/// Best-effort: a failed process listing is reported on stdout but does not
/// set a non-zero exit code. Only a permission error while signalling does.
pub fn run_kill(config: &RecyclerConfig, lister: &dyn ProcessLister) -> i32 {
    let lines = match lister.list() {
        Ok(lines) => lines,
        Err(e) => {
            println!("Error running ps command: {}", e);
            return 0;
        }
    };

    match find_target(
        &lines,
        &config.target.name,
        &config.target.exclusion,
        std::process::id(),
    ) {
        Some(pid) => signal_target(pid),
        None => {
            tracing::info!(target = %config.target.name, "no running instance found");
            0
        }
    }
}

/// Restart variant: find the target, send SIGTERM, then start a replacement
/// and wait for it.
///
/// An enumeration failure here aborts with exit code 1 before any signal is
/// sent. The relaunch phase runs whether or not a target was found, and its
/// failures are reported but never change the exit code.
pub async fn run_restart(config: &RecyclerConfig, lister: &dyn ProcessLister) -> i32 {
    let lines = match lister.list() {
        Ok(lines) => lines,
        Err(e) => {
            println!("Error running ps command: {}", e);
            return 1;
        }
    };

    if let Some(pid) = find_target(
        &lines,
        &config.target.name,
        &config.target.exclusion,
        std::process::id(),
    ) {
        let code = signal_target(pid);
        if code != 0 {
            return code;
        }
    } else {
        tracing::info!(target = %config.target.name, "no running instance found");
    }

    println!("Start a new instance");
    match relaunch(&config.launcher.resolved_command(), &config.launcher.args).await {
        RelaunchOutcome::Completed => {}
        RelaunchOutcome::Failed => println!("Terminated"),
    }
    0
}

/// Shared signal phase. A target that vanished between scan and signal
/// counts as success; a permission error is the one fatal signalling
/// outcome.
fn signal_target(pid: i32) -> i32 {
    match send_term(pid) {
        Ok(TermOutcome::Terminated) => {
            println!("Killed process {}", pid);
            0
        }
        Ok(TermOutcome::AlreadyGone) => {
            println!("Process {} already terminated", pid);
            0
        }
        Ok(TermOutcome::PermissionDenied) => {
            println!("Permission denied to kill process {}", pid);
            1
        }
        Err(e) => {
            tracing::error!(pid, error = %e, "unexpected error signalling target");
            1
        }
    }
}

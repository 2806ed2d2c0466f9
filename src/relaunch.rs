/// Replacement-process launch: spawn the configured launcher and block
/// until it exits.
use std::path::Path;
use std::time::Instant;
use tokio::process::Command;

/// Result of a relaunch attempt. There is deliberately no error variant:
/// spawn failures and abnormal exits both collapse into `Failed`, which
/// callers report and swallow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaunchOutcome {
    /// The replacement process ran and exited cleanly.
    Completed,
    /// The replacement process failed to start or exited abnormally.
    Failed,
}

/// Spawn the launcher and wait for it to finish. No timeout: the launcher
/// is expected to run the server in the foreground, so this blocks for the
/// server's whole lifetime.
pub async fn relaunch(command: &Path, args: &[String]) -> RelaunchOutcome {
    tracing::info!(
        command = %command.display(),
        args = ?args,
        "spawning replacement process"
    );

    let start = Instant::now();

    let mut child = match Command::new(command).args(args).spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::warn!(error = %e, "failed to spawn replacement process");
            return RelaunchOutcome::Failed;
        }
    };

    let pid = child.id().unwrap_or(0);
    tracing::info!(pid, "replacement process started");

    match child.wait().await {
        Ok(status) if status.success() => {
            tracing::info!(
                duration_secs = start.elapsed().as_secs(),
                "replacement process completed"
            );
            RelaunchOutcome::Completed
        }
        Ok(status) => {
            tracing::warn!(exit_code = ?status.code(), "replacement process exited abnormally");
            RelaunchOutcome::Failed
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to wait for replacement process");
            RelaunchOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_relaunch_clean_exit_is_completed() {
        let outcome = relaunch(&PathBuf::from("true"), &[]).await;
        assert_eq!(outcome, RelaunchOutcome::Completed);
    }

    #[tokio::test]
    async fn test_relaunch_nonzero_exit_is_failed() {
        let outcome = relaunch(&PathBuf::from("sh"), &args(&["-c", "exit 3"])).await;
        assert_eq!(outcome, RelaunchOutcome::Failed);
    }

    #[tokio::test]
    async fn test_relaunch_missing_command_is_failed() {
        let outcome = relaunch(&PathBuf::from("/nonexistent/easycoder"), &[]).await;
        assert_eq!(outcome, RelaunchOutcome::Failed);
    }

    #[tokio::test]
    async fn test_relaunch_blocks_until_child_exits() {
        let start = Instant::now();
        let outcome = relaunch(&PathBuf::from("sleep"), &args(&["0.1"])).await;
        assert_eq!(outcome, RelaunchOutcome::Completed);
        assert!(start.elapsed().as_millis() >= 80);
    }
}

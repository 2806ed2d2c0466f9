/// Process-table enumeration: run the listing command and hand back its
/// output one line at a time.
use crate::config::ListingConfig;
use std::process::{Command, ExitStatus};

/// Source of process-listing lines.
///
/// The production implementation shells out to `ps`; tests substitute a
/// canned listing.
pub trait ProcessLister {
    fn list(&self) -> Result<Vec<String>, ListError>;
}

/// Errors that can occur while enumerating processes.
#[derive(Debug)]
pub enum ListError {
    /// The listing command could not be started.
    Spawn {
        command: String,
        source: std::io::Error,
    },
    /// The listing command ran but exited with a non-zero status.
    Exit { command: String, status: ExitStatus },
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::Spawn { command, source } => {
                write!(f, "failed to run {}: {}", command, source)
            }
            ListError::Exit { command, status } => {
                write!(f, "{} exited with {}", command, status)
            }
        }
    }
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListError::Spawn { source, .. } => Some(source),
            ListError::Exit { .. } => None,
        }
    }
}

/// Runs the configured listing command (default `ps -eaf`) and splits its
/// stdout into lines. Blocks until the command completes.
pub struct PsLister {
    command: String,
    args: Vec<String>,
}

impl PsLister {
    pub fn new(config: &ListingConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
        }
    }
}

impl ProcessLister for PsLister {
    fn list(&self) -> Result<Vec<String>, ListError> {
        tracing::debug!(command = %self.command, args = ?self.args, "enumerating processes");

        let output = Command::new(&self.command)
            .args(&self.args)
            .output()
            .map_err(|e| ListError::Spawn {
                command: self.command.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(ListError::Exit {
                command: self.command.clone(),
                status: output.status,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let lines: Vec<String> = stdout.lines().map(str::to_owned).collect();
        tracing::debug!(line_count = lines.len(), "process listing captured");
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh_lister(script: &str) -> PsLister {
        PsLister::new(&ListingConfig {
            command: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
        })
    }

    #[test]
    fn test_list_splits_stdout_into_lines() {
        let lister = sh_lister("printf 'one\\ntwo\\nthree\\n'");
        let lines = lister.list().unwrap();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_list_empty_output() {
        let lister = sh_lister("true");
        let lines = lister.list().unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_list_nonzero_exit_is_error() {
        let lister = sh_lister("echo partial; exit 3");
        let err = lister.list().unwrap_err();
        assert!(matches!(err, ListError::Exit { .. }));
        assert!(err.to_string().contains("exited with"));
    }

    #[test]
    fn test_list_missing_command_is_spawn_error() {
        let lister = PsLister::new(&ListingConfig {
            command: "nonexistent-listing-command-xyz".to_string(),
            args: vec![],
        });
        let err = lister.list().unwrap_err();
        assert!(matches!(err, ListError::Spawn { .. }));
        assert!(err.to_string().contains("failed to run"));
    }

    #[test]
    fn test_real_ps_lists_this_process() {
        // The default listing must contain the test runner itself.
        let lister = PsLister::new(&ListingConfig::default());
        let lines = lister.list().unwrap();
        let me = std::process::id().to_string();
        assert!(lines
            .iter()
            .any(|line| line.split_whitespace().nth(1) == Some(me.as_str())));
    }
}

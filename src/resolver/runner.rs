//! Subprocess execution behind a trait seam
//!
//! The resolver depends on a plain `CommandRunner` collaborator so tests can
//! substitute scripted doubles without spawning processes. Output is captured
//! regardless of exit code; some tools (notably `pod trunk`) exit non-zero
//! while still printing a usable listing.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Default timeout for each external command (30 seconds)
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Captured result of a finished command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Captured standard output
    pub stdout: String,
    /// Process exit code (-1 when terminated by signal)
    pub exit_code: i32,
}

/// Failures that prevent a command from producing output
#[derive(Error, Debug, Clone)]
pub enum CommandError {
    /// The command could not be launched at all
    #[error("failed to launch {program}: {message}")]
    Launch { program: String, message: String },

    /// The command did not finish within the timeout
    #[error("{program} timed out after {seconds}s")]
    Timeout { program: String, seconds: u64 },
}

/// Executes external commands and captures their output
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args`, capturing stdout regardless of exit code
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, CommandError>;
}

/// Runner backed by real subprocesses with a per-command timeout
pub struct SystemRunner {
    timeout: Duration,
}

impl SystemRunner {
    /// Creates a runner with the default timeout
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_COMMAND_TIMEOUT)
    }

    /// Creates a runner with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, CommandError> {
        let future = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output();

        match tokio::time::timeout(self.timeout, future).await {
            Err(_) => Err(CommandError::Timeout {
                program: program.to_string(),
                seconds: self.timeout.as_secs(),
            }),
            Ok(Err(e)) => Err(CommandError::Launch {
                program: program.to_string(),
                message: e.to_string(),
            }),
            Ok(Ok(output)) => Ok(CommandOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                exit_code: output.status.code().unwrap_or(-1),
            }),
        }
    }
}

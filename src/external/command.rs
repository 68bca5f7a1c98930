//! Base command execution abstraction
//!
//! Provides the foundational trait for executing external storage commands,
//! enabling dependency injection for testing.

use async_trait::async_trait;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;

use crate::observability::command_metrics;

/// Captured streams and exit status of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status_code == 0
    }

    /// Collapse the captured streams into the single text a caller observes.
    ///
    /// Exit code 0 resolves to stdout, substituting stderr when stdout is
    /// empty; a nonzero exit fails with stderr, substituting stdout when
    /// stderr is empty. The LVM tools report on either stream depending on
    /// the operation, so both fallbacks are part of the contract.
    pub fn resolve(self) -> Result<String, CommandError> {
        if self.success() {
            if self.stdout.is_empty() {
                Ok(self.stderr)
            } else {
                Ok(self.stdout)
            }
        } else {
            let message = if self.stderr.is_empty() {
                self.stdout
            } else {
                self.stderr
            };
            Err(CommandError::ExecutionFailed {
                status_code: self.status_code,
                message,
            })
        }
    }
}

#[derive(Debug, Error, Clone)]
pub enum CommandError {
    #[error("Command exited with status {status_code}: {message}")]
    ExecutionFailed { status_code: i32, message: String },
    #[error("Command not found: {command}")]
    CommandNotFound { command: String },
    #[error("IO error: {message}")]
    Io { message: String },
}

/// Trait for executing external commands
///
/// This abstraction allows the rest of the codebase to issue storage
/// commands without directly depending on tokio::process::Command, enabling
/// testing with mock implementations.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Spawn `program` with `args`, optionally feeding `input` to its stdin,
    /// and capture both output streams until the process exits. Waits
    /// indefinitely; there is no timeout or cancellation path.
    async fn execute_with_input(
        &self,
        program: &str,
        args: &[&str],
        input: Option<&str>,
    ) -> Result<CommandOutput, CommandError>;

    async fn execute(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        self.execute_with_input(program, args, None).await
    }

    /// Execute and resolve to the canonical result text in one step.
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        input: Option<&str>,
    ) -> Result<String, CommandError> {
        self.execute_with_input(program, args, input).await?.resolve()
    }
}

/// Real implementation using tokio::process::Command
///
/// Commands are spawned directly from an argument array, never through a
/// shell, so parameters cannot be reinterpreted as shell syntax.
pub struct ProcessCommandExecutor;

#[async_trait]
impl CommandExecutor for ProcessCommandExecutor {
    async fn execute_with_input(
        &self,
        program: &str,
        args: &[&str],
        input: Option<&str>,
    ) -> Result<CommandOutput, CommandError> {
        tracing::debug!(program, ?args, has_input = input.is_some(), "Spawning command");
        command_metrics().record_spawn();

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command.spawn().map_err(|e| {
            command_metrics().record_launch_failure();
            if e.kind() == std::io::ErrorKind::NotFound {
                CommandError::CommandNotFound {
                    command: program.to_string(),
                }
            } else {
                CommandError::Io {
                    message: e.to_string(),
                }
            }
        })?;

        // Input is written exactly once, immediately after spawn. Dropping
        // the handle closes the pipe so the child sees EOF after the write.
        if let Some(text) = input {
            let mut stdin = child.stdin.take().ok_or_else(|| CommandError::Io {
                message: "Failed to open stdin".to_string(),
            })?;
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| CommandError::Io {
                    message: e.to_string(),
                })?;
        }

        let mut stdout = child.stdout.take().ok_or_else(|| CommandError::Io {
            message: "Failed to capture stdout".to_string(),
        })?;
        let mut stderr = child.stderr.take().ok_or_else(|| CommandError::Io {
            message: "Failed to capture stderr".to_string(),
        })?;

        let mut out_buf = Vec::new();
        let mut err_buf = Vec::new();

        // Drain both streams while waiting for exit. Each buffer is
        // append-only, receives chunks in arrival order, and is owned by
        // this invocation alone.
        let (status, _, _) = tokio::try_join!(
            child.wait(),
            stdout.read_to_end(&mut out_buf),
            stderr.read_to_end(&mut err_buf),
        )
        .map_err(|e| CommandError::Io {
            message: e.to_string(),
        })?;

        let output = CommandOutput {
            // Killed by signal leaves no exit code; treat as failure.
            status_code: status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&out_buf).to_string(),
            stderr: String::from_utf8_lossy(&err_buf).to_string(),
        };

        if !output.success() {
            command_metrics().record_failure();
            tracing::warn!(program, status_code = output.status_code, "Command failed");
        }

        Ok(output)
    }
}

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{ProcessOutcome, ProcessRunner};

const MAX_STDERR_CHARS: usize = 500;

/// Runs external tools with captured output. Children are killed when the wait is abandoned.
pub struct TokioProcessRunner;

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, command: &str, args: &[String], timeout: Duration) -> ProcessOutcome {
        let child = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(command, error = %e, "Failed to launch process");
                return ProcessOutcome::LaunchFailed(e.to_string());
            }
        };

        tracing::debug!(command, args = ?args, pid = ?child.id(), "Process started");

        // Dropping the wait future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                tracing::error!(command, error = %e, "Failed to wait for process");
                return ProcessOutcome::LaunchFailed(e.to_string());
            }
            Err(_) => {
                tracing::warn!(
                    command,
                    timeout_secs = timeout.as_secs_f32(),
                    "Process timed out and was killed"
                );
                return ProcessOutcome::TimedOut { after: timeout };
            }
        };

        if output.status.success() {
            tracing::debug!(command, "Process exited successfully");
            return ProcessOutcome::Succeeded;
        }

        let stderr = stderr_tail(&String::from_utf8_lossy(&output.stderr));
        tracing::warn!(
            command,
            code = ?output.status.code(),
            stderr = %stderr,
            "Process exited with failure"
        );

        ProcessOutcome::Exited {
            code: output.status.code(),
            stderr,
        }
    }
}

/// Last part of stderr; tools like ffmpeg print the actual error at the end.
fn stderr_tail(stderr: &str) -> String {
    let trimmed = stderr.trim();
    let count = trimmed.chars().count();
    if count <= MAX_STDERR_CHARS {
        return trimmed.to_string();
    }
    trimmed.chars().skip(count - MAX_STDERR_CHARS).collect()
}

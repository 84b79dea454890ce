use std::time::Duration;

use async_trait::async_trait;

#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Runs `command` to completion or until `timeout` elapses, killing it in that case.
    async fn run(&self, command: &str, args: &[String], timeout: Duration) -> ProcessOutcome;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    Succeeded,
    Exited { code: Option<i32>, stderr: String },
    TimedOut { after: Duration },
    LaunchFailed(String),
}

impl ProcessOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessOutcome::Succeeded)
    }

    pub fn diagnostic(&self) -> String {
        match self {
            ProcessOutcome::Succeeded => "succeeded".to_string(),
            ProcessOutcome::Exited { code: Some(code), stderr } if stderr.is_empty() => {
                format!("exited with status {}", code)
            }
            ProcessOutcome::Exited { code: Some(code), stderr } => {
                format!("exited with status {}: {}", code, stderr)
            }
            ProcessOutcome::Exited { code: None, stderr } => {
                format!("terminated by signal: {}", stderr)
            }
            ProcessOutcome::TimedOut { after } => {
                format!("timed out after {}s", after.as_secs_f32())
            }
            ProcessOutcome::LaunchFailed(reason) => format!("failed to launch: {}", reason),
        }
    }
}

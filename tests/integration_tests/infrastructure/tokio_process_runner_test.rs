#![cfg(unix)]

use std::time::{Duration, Instant};

use tolk::application::ports::{ProcessOutcome, ProcessRunner};
use tolk::infrastructure::process::TokioProcessRunner;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
async fn given_command_exiting_zero_when_run_then_succeeds() {
    let outcome = TokioProcessRunner
        .run("sh", &args(&["-c", "exit 0"]), Duration::from_secs(5))
        .await;

    assert_eq!(outcome, ProcessOutcome::Succeeded);
}

#[tokio::test]
async fn given_command_failing_when_run_then_reports_code_and_stderr() {
    let outcome = TokioProcessRunner
        .run(
            "sh",
            &args(&["-c", "echo 'Invalid data found' >&2; exit 3"]),
            Duration::from_secs(5),
        )
        .await;

    assert_eq!(
        outcome,
        ProcessOutcome::Exited {
            code: Some(3),
            stderr: "Invalid data found".to_string(),
        }
    );
}

#[tokio::test]
async fn given_long_running_command_when_timeout_elapses_then_killed_and_timed_out() {
    let started = Instant::now();

    let outcome = TokioProcessRunner
        .run("sleep", &args(&["10"]), Duration::from_millis(200))
        .await;

    assert!(matches!(outcome, ProcessOutcome::TimedOut { .. }));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn given_missing_binary_when_run_then_launch_failed() {
    let outcome = TokioProcessRunner
        .run(
            "tolk-no-such-transcoder",
            &args(&["-version"]),
            Duration::from_secs(5),
        )
        .await;

    assert!(matches!(outcome, ProcessOutcome::LaunchFailed(_)));
}

#[tokio::test]
async fn given_noisy_failure_when_run_then_keeps_only_stderr_tail() {
    let outcome = TokioProcessRunner
        .run(
            "sh",
            &args(&["-c", "head -c 5000 /dev/zero | tr '\\0' 'x' >&2; echo END >&2; exit 1"]),
            Duration::from_secs(5),
        )
        .await;

    let ProcessOutcome::Exited { stderr, .. } = outcome else {
        panic!("expected non-zero exit, got {:?}", outcome);
    };
    assert_eq!(stderr.chars().count(), 500);
    assert!(stderr.ends_with("END"));
}

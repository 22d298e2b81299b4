//! External process execution.
//!
//! Every external command the pipeline issues goes through [`CommandRunner`],
//! so the dry-run short-circuit lives in exactly one place and is never
//! bypassed. Each invocation is logged at debug level regardless of outcome.

use crate::error::{CommandError, Result};

/// Captured output of a finished external command
#[derive(Debug, Default)]
pub struct CommandOutput {
    /// Raw standard output bytes
    pub stdout: Vec<u8>,
    /// Raw standard error bytes
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// Decode standard output, replacing invalid UTF-8
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Decode standard error, replacing invalid UTF-8
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Single funnel for running external processes
#[derive(Debug, Clone, Copy)]
pub struct CommandRunner {
    dry_run: bool,
}

impl CommandRunner {
    /// Create a runner. With `dry_run` set, no process is ever started.
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Whether this runner is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Run a command (executable plus arguments), capturing its output.
    ///
    /// In dry-run mode the intended command is logged and empty output is
    /// returned without starting a process. A non-zero exit status is an
    /// error carrying the command line and decoded stderr.
    pub async fn run(&self, command: &[String]) -> Result<CommandOutput> {
        let (program, args) = command.split_first().ok_or(CommandError::Empty)?;
        let rendered = command.join(" ");

        if self.dry_run {
            log::info!("Dry run: would run command: {rendered}");
            return Ok(CommandOutput::default());
        }

        let output = tokio::process::Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|source| CommandError::Spawn {
                command: rendered.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::debug!("{rendered}: {} {}", stdout.trim(), stderr.trim());

        if !output.status.success() {
            return Err(CommandError::Failed {
                command: rendered,
                stderr: stderr.into_owned(),
            }
            .into());
        }

        Ok(CommandOutput {
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseError;

    fn tokens(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn dry_run_returns_empty_output() {
        let runner = CommandRunner::new(true);
        // A binary that cannot exist; dry-run must not try to start it.
        let output = runner
            .run(&tokens(&["definitely-not-a-real-binary-1234", "--flag"]))
            .await
            .unwrap();
        assert!(output.stdout.is_empty());
        assert!(output.stderr.is_empty());
    }

    #[tokio::test]
    async fn empty_command_is_an_error() {
        let runner = CommandRunner::new(false);
        let err = runner.run(&[]).await.unwrap_err();
        assert!(matches!(err, ReleaseError::Command(CommandError::Empty)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_stdout() {
        let runner = CommandRunner::new(false);
        let output = runner.run(&tokens(&["echo", "hello"])).await.unwrap();
        assert_eq!(output.stdout_text().trim(), "hello");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_carries_command_and_stderr() {
        let runner = CommandRunner::new(false);
        let err = runner
            .run(&tokens(&["sh", "-c", "echo boom >&2; exit 3"]))
            .await
            .unwrap_err();
        match err {
            ReleaseError::Command(CommandError::Failed { command, stderr }) => {
                assert!(command.starts_with("sh -c"));
                assert!(stderr.contains("boom"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let runner = CommandRunner::new(false);
        let err = runner
            .run(&tokens(&["definitely-not-a-real-binary-1234"]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ReleaseError::Command(CommandError::Spawn { .. })
        ));
    }
}

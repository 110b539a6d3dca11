// Process runner - Structured, time-bounded invocation of external tools

use std::ffi::{OsStr, OsString};
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Default upper bound for a single tool invocation
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Captured stdout of a tool that exited successfully
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub stdout: String,
}

/// Why a tool invocation did not succeed
#[derive(Error, Debug)]
pub enum ToolFailure {
    #[error("could not start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}", exit_label(.code))]
    Exit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("{program} did not finish within {timeout:?}")]
    Timeout {
        program: String,
        timeout: Duration,
    },

    #[error("failed waiting for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// Spawns tools with an argument vector, never through a shell
#[derive(Debug, Clone)]
pub struct ToolRunner {
    timeout: Duration,
}

impl Default for ToolRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl ToolRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Run `program` to completion, capturing both output streams.
    ///
    /// Stderr is only kept for the failure case.
    ///
    /// The child is killed if the timeout expires first.
    pub async fn run(&self, program: &str, args: &[OsString]) -> Result<ToolOutput, ToolFailure> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = command.spawn().map_err(|source| ToolFailure::Spawn {
            program: program.to_string(),
            source,
        })?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| ToolFailure::Wait {
                program: program.to_string(),
                source,
            })?,
            Err(_) => {
                return Err(ToolFailure::Timeout {
                    program: program.to_string(),
                    timeout: self.timeout,
                })
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            debug!(program, stderr = %stderr.trim(), "tool reported failure");
            return Err(ToolFailure::Exit {
                program: program.to_string(),
                code: output.status.code(),
                stderr,
            });
        }

        Ok(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Human-readable rendering of a command line, for log lines only
pub fn display_command(program: &str, args: &[OsString]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&quote_for_display(arg));
    }
    line
}

fn quote_for_display(arg: &OsStr) -> String {
    let text = arg.to_string_lossy();
    if text.is_empty() || text.chars().any(|c| c.is_whitespace() || c == '"') {
        format!("\"{}\"", text.replace('"', "\\\""))
    } else {
        text.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_display_command_quotes_spaces() {
        let line = display_command("ffmpeg", &args(&["-i", "my video.mp4", "-y"]));
        assert_eq!(line, "ffmpeg -i \"my video.mp4\" -y");
    }

    #[test]
    fn test_display_command_plain_args() {
        let line = display_command("ffprobe", &args(&["-v", "error"]));
        assert_eq!(line, "ffprobe -v error");
    }

    #[test]
    fn test_exit_label() {
        assert_eq!(exit_label(&Some(2)), "status 2");
        assert_eq!(exit_label(&None), "a signal");
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_failure() {
        let runner = ToolRunner::default();
        let result = runner.run("screvi-no-such-tool-xyz", &[]).await;
        assert!(matches!(result, Err(ToolFailure::Spawn { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_captures_stdout() {
        let runner = ToolRunner::default();
        let output = runner.run("echo", &args(&["42.5"])).await.unwrap();
        assert_eq!(output.stdout.trim(), "42.5");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_failure() {
        let runner = ToolRunner::default();
        let result = runner.run("false", &[]).await;
        assert!(matches!(result, Err(ToolFailure::Exit { code: Some(1), .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout_kills_hung_tool() {
        let runner = ToolRunner::new(Duration::from_millis(200));
        let started = std::time::Instant::now();
        let result = runner.run("sleep", &args(&["30"])).await;
        assert!(matches!(result, Err(ToolFailure::Timeout { .. })));
        assert!(started.elapsed() < Duration::from_secs(10));
    }
}

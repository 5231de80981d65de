//! Process boundary: spawning the interpreter and waiting for it.

use crate::interpreter::Interpreter;
use anyhow::{Context, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChildExit {
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
    /// Terminating signal (Unix only).
    pub signal: Option<i32>,
}

impl ChildExit {
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            signal: None,
        }
    }

    #[cfg(test)]
    pub fn signaled(signal: i32) -> Self {
        Self {
            code: None,
            signal: Some(signal),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = {
            use std::os::unix::process::ExitStatusExt;
            status.signal()
        };
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }
}

/// Runs an external program to completion.
pub trait ProcessRunner {
    /// Turn a configured program name into something runnable. Fails
    /// before spawning when the interpreter is not installed.
    fn resolve(&self, program: &str) -> Result<PathBuf> {
        Interpreter::new(program).locate()
    }

    /// Spawn `program` with `args`, block until it exits.
    fn run(&self, program: &Path, args: &[OsString]) -> Result<ChildExit>;
}

/// Real runner: inherits stdio, no timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner {
    /// Send the child's stdout to our stderr so our own stdout stays
    /// machine-readable.
    pub stdout_to_stderr: bool,
}

impl SystemRunner {
    pub fn new(stdout_to_stderr: bool) -> Self {
        Self { stdout_to_stderr }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<ChildExit> {
        tracing::debug!(program = %program.display(), ?args, "spawning interpreter");

        let stdout = if self.stdout_to_stderr {
            Stdio::from(io::stderr())
        } else {
            Stdio::inherit()
        };

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("Failed to run {}", program.display()))?;

        tracing::debug!(%status, "interpreter exited");
        Ok(status.into())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_system_runner_reports_exit_code() {
        let exit = SystemRunner::default()
            .run(Path::new("sh"), &["-c".into(), "exit 3".into()])
            .unwrap();
        assert_eq!(exit, ChildExit::exited(3));
        assert!(!exit.success());
    }

    #[test]
    fn test_system_runner_success() {
        let exit = SystemRunner::default().run(Path::new("true"), &[]).unwrap();
        assert!(exit.success());
    }

    #[test]
    fn test_spawn_failure_propagates() {
        let result = SystemRunner::default().run(Path::new("/nonexistent/interpreter"), &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_redirected_stdout_still_reports_status() {
        let exit = SystemRunner::new(true)
            .run(Path::new("sh"), &["-c".into(), "echo noise; exit 0".into()])
            .unwrap();
        assert!(exit.success());
    }
}

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Interpreter used when nothing else is configured.
pub const DEFAULT_INTERPRETER: &str = "powershell";

/// External PowerShell-compatible shell that runs the companion script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    program: String,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(DEFAULT_INTERPRETER)
    }
}

impl Interpreter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program name or path as configured.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Find the interpreter on PATH (absolute paths are checked in place).
    pub fn locate(&self) -> Result<PathBuf> {
        which::which(&self.program).with_context(|| {
            format!(
                "Interpreter '{}' not found. Install PowerShell or pass --interpreter",
                self.program
            )
        })
    }

    /// Arguments passed to the interpreter: no profile, no execution
    /// policy, run `script` as a file.
    pub fn command_args(&self, script: &Path) -> Vec<OsString> {
        vec![
            "-NoProfile".into(),
            "-ExecutionPolicy".into(),
            "Bypass".into(),
            "-File".into(),
            script.as_os_str().to_owned(),
        ]
    }

    /// Human-readable command line, used in failure messages.
    pub fn display_command(&self, script: &Path) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(
            self.command_args(script)
                .iter()
                .map(|a| a.to_string_lossy().into_owned()),
        );
        parts.join(" ")
    }
}

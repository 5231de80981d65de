//! Launcher - run the companion script through PowerShell
//!
//! One straight-line pass per invocation:
//!
//! 1. report the base directory
//! 2. stop if `<base>/script_event_logs.ps1` is missing
//! 3. run `powershell -NoProfile -ExecutionPolicy Bypass -File <script>`
//! 4. report success or the failure detail
//!
//! Status lines go to the writer handed to [`Launcher::run`]; the child's
//! own output is inherited by the runner.

use crate::config::LauncherConfig;
use crate::paths;
use crate::runner::{ChildExit, ProcessRunner};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What a run ended with. Unexpected failures are `Err` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Succeeded,
    ScriptMissing { path: PathBuf },
    ScriptFailed { exit: ChildExit },
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Succeeded => 0,
            Outcome::ScriptMissing { .. } => 1,
            Outcome::ScriptFailed { exit } => match exit.code {
                Some(code) if code != 0 => code,
                _ => 1,
            },
        }
    }
}

pub struct Launcher<R: ProcessRunner> {
    config: LauncherConfig,
    runner: R,
}

impl<R: ProcessRunner> Launcher<R> {
    pub fn new(config: LauncherConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Run once against `base_dir`, writing status lines to `out`.
    pub fn run(&self, base_dir: &Path, out: &mut dyn Write) -> Result<Outcome> {
        writeln!(out, "Running from: {}", base_dir.display())?;

        let script = paths::target_script_path(base_dir, &self.config.script_name);
        if !script.exists() {
            tracing::debug!(path = %script.display(), "companion script missing");
            writeln!(out, "Error: Target script not found: {}", script.display())?;
            return Ok(Outcome::ScriptMissing { path: script });
        }

        let interpreter = &self.config.interpreter;
        let program = self.runner.resolve(interpreter.program())?;
        tracing::info!(
            interpreter = %program.display(),
            script = %script.display(),
            "running companion script"
        );

        let exit = self.runner.run(&program, &interpreter.command_args(&script))?;
        if !exit.success() {
            writeln!(
                out,
                "PowerShell execution failed: {}",
                failure_detail(&interpreter.display_command(&script), &exit)
            )?;
            return Ok(Outcome::ScriptFailed { exit });
        }

        writeln!(out, "{} successfully executed.", self.config.script_name)?;
        Ok(Outcome::Succeeded)
    }
}

fn failure_detail(command: &str, exit: &ChildExit) -> String {
    match (exit.code, exit.signal) {
        (Some(code), _) => format!("Command '{command}' returned non-zero exit status {code}."),
        (None, Some(signal)) => format!("Command '{command}' died with signal {signal}."),
        (None, None) => format!("Command '{command}' ended without an exit status."),
    }
}

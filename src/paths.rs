//! Single source of truth for where the launcher looks for its script.
//!
//! This module defines WHERE the companion script lives. The only I/O is
//! asking the OS where the running program is; no existence checks happen
//! here.
//!
//! # Layout
//!
//! ```text
//! <base directory>/
//! ├── event-log-launcher      # This binary (packaged mode)
//! └── script_event_logs.ps1   # Companion script, run through PowerShell
//! ```
//!
//! In source mode (`cargo run`) the base directory is the crate root
//! instead of `target/<profile>/`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// File name of the companion script: `script_event_logs.ps1`
pub const COMPANION_SCRIPT: &str = "script_event_logs.ps1";

/// Cargo exports this to every process it runs. Only a value naming this
/// crate's own directory means we were started from its source checkout;
/// child processes inherit the variable from unrelated cargo runs.
const SOURCE_MARKER_VAR: &str = "CARGO_MANIFEST_DIR";

/// Crate directory this binary was built from.
const BUILD_MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// How the running program was started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Standalone binary copied somewhere next to its script.
    Packaged,
    /// Started through cargo; holds the crate's source directory.
    Source(PathBuf),
}

impl ExecutionMode {
    /// Detect the mode from the process environment.
    pub fn detect() -> Self {
        Self::from_marker(env::var_os(SOURCE_MARKER_VAR).as_deref())
    }

    /// Mode for a given `CARGO_MANIFEST_DIR` value.
    pub fn from_marker(value: Option<&OsStr>) -> Self {
        match value {
            Some(dir) if dir == OsStr::new(BUILD_MANIFEST_DIR) => {
                ExecutionMode::Source(PathBuf::from(dir))
            }
            _ => ExecutionMode::Packaged,
        }
    }

    pub fn is_packaged(&self) -> bool {
        matches!(self, ExecutionMode::Packaged)
    }
}

/// Directory containing the running program.
///
/// Re-derived on every call. The result is canonicalized so the printed
/// path matches what the interpreter will see.
pub fn resolve_program_directory(mode: &ExecutionMode) -> Result<PathBuf> {
    let dir = match mode {
        ExecutionMode::Packaged => {
            let exe = env::current_exe().context("Failed to locate the running executable")?;
            exe.parent()
                .map(Path::to_path_buf)
                .with_context(|| format!("Executable has no parent directory: {}", exe.display()))?
        }
        ExecutionMode::Source(dir) => dir.clone(),
    };

    dir.canonicalize()
        .with_context(|| format!("Failed to resolve base directory: {}", dir.display()))
}

/// Companion script path: `<base>/<file_name>`
pub fn target_script_path(base: &Path, file_name: &str) -> PathBuf {
    base.join(file_name)
}

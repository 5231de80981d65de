use crate::launcher::Outcome;
use crate::paths::ExecutionMode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Machine-readable summary of one run, printed with `--json`.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub base_dir: PathBuf,
    pub script: PathBuf,
    pub interpreter: String,
    pub mode: ExecutionMode,
    pub outcome: Outcome,
    pub exit_code: i32,
    pub started_at: DateTime<Utc>,
    pub duration_ms: i64,
}

impl RunReport {
    pub fn new(
        base_dir: PathBuf,
        script: PathBuf,
        interpreter: String,
        mode: ExecutionMode,
        outcome: Outcome,
        started_at: DateTime<Utc>,
    ) -> Self {
        let exit_code = outcome.exit_code();
        Self {
            base_dir,
            script,
            interpreter,
            mode,
            outcome,
            exit_code,
            started_at,
            duration_ms: (Utc::now() - started_at).num_milliseconds(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

use crate::interpreter::Interpreter;
use crate::paths::{self, ExecutionMode, COMPANION_SCRIPT};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration for the launcher
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Shell used to run the companion script
    pub interpreter: Interpreter,
    /// File name of the companion script inside the base directory
    pub script_name: String,
    /// Use this directory instead of the program's own location
    pub base_dir_override: Option<PathBuf>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            interpreter: Interpreter::default(),
            script_name: COMPANION_SCRIPT.to_string(),
            base_dir_override: None,
        }
    }
}

impl LauncherConfig {
    /// Base directory for this run, derived fresh each call.
    pub fn base_dir(&self, mode: &ExecutionMode) -> Result<PathBuf> {
        match &self.base_dir_override {
            Some(dir) => Ok(dir.clone()),
            None => paths::resolve_program_directory(mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_behavior() {
        let config = LauncherConfig::default();
        assert_eq!(config.interpreter.program(), "powershell");
        assert_eq!(config.script_name, "script_event_logs.ps1");
        assert!(config.base_dir_override.is_none());
    }

    #[test]
    fn test_override_wins_over_program_location() {
        let config = LauncherConfig {
            base_dir_override: Some(PathBuf::from("/tmp/empty")),
            ..Default::default()
        };
        assert_eq!(
            config.base_dir(&ExecutionMode::Packaged).unwrap(),
            PathBuf::from("/tmp/empty")
        );
    }

    #[test]
    fn test_base_dir_follows_mode_on_each_call() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let config = LauncherConfig::default();

        let a = config
            .base_dir(&ExecutionMode::Source(first.path().to_path_buf()))
            .unwrap();
        let b = config
            .base_dir(&ExecutionMode::Source(second.path().to_path_buf()))
            .unwrap();

        assert_eq!(a, first.path().canonicalize().unwrap());
        assert_eq!(b, second.path().canonicalize().unwrap());
    }

    #[test]
    fn test_base_dir_picks_up_changed_override() {
        let mut config = LauncherConfig {
            base_dir_override: Some(PathBuf::from("/tmp/work")),
            ..Default::default()
        };
        assert_eq!(
            config.base_dir(&ExecutionMode::Packaged).unwrap(),
            PathBuf::from("/tmp/work")
        );

        config.base_dir_override = None;
        let exe = std::env::current_exe().unwrap().canonicalize().unwrap();
        assert_eq!(
            Some(config.base_dir(&ExecutionMode::Packaged).unwrap().as_path()),
            exe.parent()
        );
    }
}

pub mod config;
pub mod interpreter;
pub mod launcher;
pub mod paths;
pub mod report;
pub mod runner;

// Re-export commonly used types
pub use config::LauncherConfig;
pub use interpreter::Interpreter;
pub use launcher::{Launcher, Outcome};
pub use paths::ExecutionMode;
pub use runner::{ChildExit, ProcessRunner, SystemRunner};

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use event_log_launcher::interpreter::DEFAULT_INTERPRETER;
use event_log_launcher::paths::{self, COMPANION_SCRIPT};
use event_log_launcher::report::RunReport;
use event_log_launcher::{ExecutionMode, Interpreter, Launcher, LauncherConfig, SystemRunner};

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Run script_event_logs.ps1 from this program's directory through PowerShell", long_about = None)]
struct Cli {
    /// Interpreter used to run the script
    #[arg(long, env = "EVENT_LOG_LAUNCHER_INTERPRETER", default_value = DEFAULT_INTERPRETER)]
    interpreter: String,

    /// Script file name, looked up in the base directory
    #[arg(long, env = "EVENT_LOG_LAUNCHER_SCRIPT", default_value = COMPANION_SCRIPT)]
    script: String,

    /// Look for the script here instead of next to the program
    #[arg(long, env = "EVENT_LOG_LAUNCHER_BASE_DIR")]
    base_dir: Option<PathBuf>,

    /// Output a JSON report instead of status lines
    #[arg(short, long)]
    json: bool,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    let started_at = Utc::now();
    let config = LauncherConfig {
        interpreter: Interpreter::new(cli.interpreter),
        script_name: cli.script,
        base_dir_override: cli.base_dir,
    };

    let mode = ExecutionMode::detect();
    tracing::debug!(packaged = mode.is_packaged(), ?mode, "detected execution mode");
    let base_dir = config.base_dir(&mode)?;

    let launcher = Launcher::new(config, SystemRunner::new(cli.json));
    let outcome = if cli.json {
        launcher.run(&base_dir, &mut io::sink())?
    } else {
        launcher.run(&base_dir, &mut io::stdout().lock())?
    };
    let exit_code = outcome.exit_code();

    if cli.json {
        let config = launcher.config();
        let script = paths::target_script_path(&base_dir, &config.script_name);
        let report = RunReport::new(
            base_dir,
            script,
            config.interpreter.program().to_string(),
            mode,
            outcome,
            started_at,
        );
        println!("{}", report.to_json()?);
    }

    Ok(exit_code)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = run(cli)?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

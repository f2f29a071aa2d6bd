use clap::Parser;
use std::path::PathBuf;
use std::process::exit;

use gotask_core::{config, registry, Error, ShellRunner};

/// Thin command-line interface for the Go backend task dispatcher.
#[derive(Debug, Parser)]
#[command(name = "gotask", about = "Dispatch build, run and tidy tasks for the Go backend")]
struct Cli {
    /// Path to a gotask config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Task selector (build, run, tidy).
    #[arg(allow_hyphen_values = true)]
    task: Option<String>,
    /// Extra flags forwarded to the `run` task.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    flags: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    // Usage errors short-circuit before any config or subprocess work.
    let Some(task) = cli.task.as_deref().and_then(registry::find) else {
        print_usage();
        exit(1);
    };

    if let Err(err) = try_main(&cli, task) {
        log::error!("{err}");
        match err {
            Error::CommandFailed { status, .. } => exit(status.code().unwrap_or(1)),
            _ => exit(1),
        }
    }
}

fn try_main(cli: &Cli, task: &registry::Task) -> gotask_core::Result<()> {
    let config = config::resolve_config(cli.config.as_deref())?;
    gotask_core::dispatch(&ShellRunner::new(), &config, task, &cli.flags)
}

fn print_usage() {
    println!("Usage: gotask <build|run|tidy> [flags]");
    println!();
    println!("Tasks:");
    for task in registry::TASKS {
        println!("  {:<7} {}", task.name, task.description);
    }
}

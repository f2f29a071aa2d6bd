//! Core crate implementing the Go backend task dispatcher.

pub mod config;
pub mod dispatch;
pub mod registry;
pub mod runner;

pub use config::Config;
pub use dispatch::dispatch;
pub use registry::Task;
pub use runner::{CommandRunner, ShellRunner};

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Common error type for the dispatcher.
#[derive(Debug, Error)]
pub enum Error {
    /// Selector did not match any registered task.
    #[error("unknown task `{0}`")]
    UnknownTask(String),
    /// The backend directory could not be entered.
    #[error("cannot enter backend directory `{}`: {source}", dir.display())]
    Chdir {
        dir: PathBuf,
        source: std::io::Error,
    },
    /// The spawned command finished with a non-zero status.
    #[error("command `{command}` failed: {status}")]
    CommandFailed { command: String, status: ExitStatus },
    /// A config file existed but did not hold valid TOML.
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient alias for results returned by the core crate.
pub type Result<T> = std::result::Result<T, Error>;

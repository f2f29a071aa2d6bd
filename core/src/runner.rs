//! Command runner abstractions.

use std::process::Command;

use crate::{Error, Result};

/// Trait describing how composed command lines get executed.
pub trait CommandRunner {
    /// Run `command_line`, blocking until the child exits.
    fn run(&self, command_line: &str) -> Result<()>;
}

/// Runner that hands the command line to the platform shell.
///
/// The child inherits stdin/stdout/stderr from this process. There is no
/// retry, no timeout and no output capture.
pub struct ShellRunner;

impl ShellRunner {
    /// Helper constructor for the shell runner.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command_line: &str) -> Result<()> {
        log::debug!("spawning `{command_line}`");
        let status = shell_command(command_line).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::CommandFailed {
                command: command_line.to_string(),
                status,
            })
        }
    }
}

#[cfg(unix)]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line);
    command
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(command_line);
    command
}

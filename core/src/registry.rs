//! Static task table mapping selectors to Go toolchain commands.

use crate::{Error, Result};

/// A single Go toolchain invocation exposed by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    /// Selector matched against the first CLI argument, case-sensitive.
    pub name: &'static str,
    /// Base command handed to the shell.
    pub command: &'static str,
    /// Whether trailing CLI flags are appended to the base command.
    pub forward_flags: bool,
    /// One-line description shown in the usage text.
    pub description: &'static str,
}

/// Every task the dispatcher knows about.
pub const TASKS: &[Task] = &[
    Task {
        name: "build",
        command: "go build",
        forward_flags: false,
        description: "compile the backend package",
    },
    Task {
        name: "run",
        command: "go run main.go",
        forward_flags: true,
        description: "run the backend, forwarding any extra flags",
    },
    Task {
        name: "tidy",
        command: "go mod tidy",
        forward_flags: false,
        description: "add missing and prune unused module requirements",
    },
];

/// Look up a task by selector.
pub fn find(name: &str) -> Option<&'static Task> {
    TASKS.iter().find(|task| task.name == name)
}

/// Like [`find`], but surfaces the miss as a typed error.
pub fn resolve(name: &str) -> Result<&'static Task> {
    find(name).ok_or_else(|| Error::UnknownTask(name.to_string()))
}

impl Task {
    /// Build the command line actually handed to the shell.
    ///
    /// Extra flags are joined by single spaces in their original order and
    /// appended verbatim, with no escaping or quoting. Tasks that do not
    /// forward flags ignore `extra_flags` entirely.
    pub fn command_line(&self, extra_flags: &[String]) -> String {
        if self.forward_flags && !extra_flags.is_empty() {
            format!("{} {}", self.command, extra_flags.join(" "))
        } else {
            self.command.to_string()
        }
    }
}

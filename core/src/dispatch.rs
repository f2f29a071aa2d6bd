//! The dispatch sequence: compose, relocate, execute.

use std::env;

use crate::config::Config;
use crate::registry::Task;
use crate::runner::CommandRunner;
use crate::{Error, Result};

/// Run `task` through `runner` with `extra_flags` appended per the task's
/// forwarding rule.
///
/// Changes this process's working directory into the configured backend
/// directory first. The mutation is global and is not restored afterwards.
/// When the directory cannot be entered, the runner is never invoked.
pub fn dispatch(
    runner: &dyn CommandRunner,
    config: &Config,
    task: &Task,
    extra_flags: &[String],
) -> Result<()> {
    let command_line = task.command_line(extra_flags);
    log::info!("==> {command_line}");

    env::set_current_dir(&config.backend_dir).map_err(|source| Error::Chdir {
        dir: config.backend_dir.clone(),
        source,
    })?;

    runner.run(&command_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use std::cell::RefCell;

    struct RecordingRunner {
        commands: RefCell<Vec<String>>,
    }

    impl RecordingRunner {
        fn new() -> Self {
            Self {
                commands: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command_line: &str) -> Result<()> {
            self.commands.borrow_mut().push(command_line.to_string());
            Ok(())
        }
    }

    #[test]
    fn missing_backend_dir_fails_before_running() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            backend_dir: dir.path().join("absent"),
        };
        let runner = RecordingRunner::new();

        let err = dispatch(&runner, &config, registry::find("build").unwrap(), &[]).unwrap_err();

        assert!(matches!(err, Error::Chdir { .. }));
        assert!(runner.commands.borrow().is_empty());
    }

    #[test]
    fn enters_backend_and_hands_over_composed_command() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            backend_dir: dir.path().to_path_buf(),
        };
        let runner = RecordingRunner::new();
        let flags = vec!["--port=8080".to_string()];

        dispatch(&runner, &config, registry::find("run").unwrap(), &flags).unwrap();

        assert_eq!(
            *runner.commands.borrow(),
            vec!["go run main.go --port=8080".to_string()]
        );
        assert_eq!(
            env::current_dir().unwrap().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }
}

//! Synchronous shell command execution.
//!
//! Every external tool the toolkit drives (build backend, test runner, twine,
//! git, cookiecutter) goes through a [`CommandRunner`]. A non-zero exit becomes
//! [`ToolkitError::CommandFailed`] carrying the child's exit code; callers
//! propagate it with `?` so nothing after a failed command runs, and the binary
//! exits with that same code.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Result, ToolkitError};
use crate::shell::ShellCommand;

pub trait CommandRunner {
    fn run(&self, command: &ShellCommand) -> Result<()>;
}

/// Runs commands through POSIX `sh -c` in a fixed working directory, with
/// stdin, stdout and stderr inherited from this process.
///
/// Command lines are built with POSIX quoting ([`crate::shell::quote_arg`]),
/// so `sh` is used on every platform. On Windows it must be on `PATH` (Git for
/// Windows and MSYS2 both ship one).
#[derive(Debug, Clone)]
pub struct ShellRunner {
    cwd: PathBuf,
}

impl ShellRunner {
    pub fn new(cwd: &Path) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &ShellCommand) -> Result<()> {
        tracing::info!("Running command: {command}");

        let status = shell_command(command.line())
            .current_dir(&self.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ToolkitError::Spawn {
                command: command.masked(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }

        tracing::error!("Command failed: {command}");
        // Killed by a signal: no exit code to hand back.
        let code = status.code().unwrap_or(1);
        Err(ToolkitError::CommandFailed {
            command: command.masked(),
            code,
        })
    }
}

fn shell_command(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", line]);
    cmd
}

/// Logs what would run and reports success without launching anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, command: &ShellCommand) -> Result<()> {
        tracing::info!("Would run: {command}");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;

    /// Records every command line and fails those starting with a registered
    /// prefix.
    #[derive(Default)]
    pub struct RecordingRunner {
        calls: RefCell<Vec<String>>,
        failures: Vec<(String, i32)>,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing(mut self, prefix: &str, code: i32) -> Self {
            self.failures.push((prefix.to_string(), code));
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command: &ShellCommand) -> Result<()> {
            self.calls.borrow_mut().push(command.line().to_string());
            match self
                .failures
                .iter()
                .find(|(prefix, _)| command.line().starts_with(prefix.as_str()))
            {
                Some((_, code)) => Err(ToolkitError::CommandFailed {
                    command: command.masked(),
                    code: *code,
                }),
                None => Ok(()),
            }
        }
    }
}

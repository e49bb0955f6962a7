//! External tools that are installed on demand.
//!
//! Presence is checked through a [`ToolProbe`] (a `PATH` lookup in
//! production). A missing tool is installed with its install command through
//! the regular [`CommandRunner`], so a failed install aborts the workflow like
//! any other failed command.

use crate::error::Result;
use crate::runner::CommandRunner;
use crate::shell::ShellCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolRequirement {
    /// Executable looked up on `PATH`.
    pub binary: &'static str,
    pub install_command: &'static str,
}

pub const TWINE: ToolRequirement = ToolRequirement {
    binary: "twine",
    install_command: "pip install twine",
};

pub const COOKIECUTTER: ToolRequirement = ToolRequirement {
    binary: "cookiecutter",
    install_command: "pip install cookiecutter",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    AlreadyInstalled,
    Installed,
}

pub trait ToolProbe {
    fn is_installed(&self, binary: &str) -> bool;
}

/// Looks executables up on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathProbe;

impl ToolProbe for PathProbe {
    fn is_installed(&self, binary: &str) -> bool {
        which::which(binary).is_ok()
    }
}

/// Reports every tool as present. Used for dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeInstalled;

impl ToolProbe for AssumeInstalled {
    fn is_installed(&self, _binary: &str) -> bool {
        true
    }
}

pub fn ensure_installed(
    tool: &ToolRequirement,
    probe: &dyn ToolProbe,
    runner: &dyn CommandRunner,
) -> Result<ToolStatus> {
    if probe.is_installed(tool.binary) {
        tracing::debug!("{} found on PATH", tool.binary);
        return Ok(ToolStatus::AlreadyInstalled);
    }
    tracing::info!("{0} not found. Installing {0}...", tool.binary);
    runner.run(&ShellCommand::new(tool.install_command))?;
    Ok(ToolStatus::Installed)
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Answers from a fixed set and records every lookup.
    #[derive(Default)]
    pub struct FixedProbe {
        installed: HashSet<String>,
        checked: RefCell<Vec<String>>,
    }

    impl FixedProbe {
        pub fn with(binaries: &[&str]) -> Self {
            Self {
                installed: binaries.iter().map(|b| b.to_string()).collect(),
                checked: RefCell::new(Vec::new()),
            }
        }

        pub fn checked(&self) -> Vec<String> {
            self.checked.borrow().clone()
        }
    }

    impl ToolProbe for FixedProbe {
        fn is_installed(&self, binary: &str) -> bool {
            self.checked.borrow_mut().push(binary.to_string());
            self.installed.contains(binary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FixedProbe;
    use super::*;
    use crate::runner::fake::RecordingRunner;

    #[test]
    fn present_tool_is_not_reinstalled() {
        let probe = FixedProbe::with(&["twine"]);
        let runner = RecordingRunner::new();
        let status = ensure_installed(&TWINE, &probe, &runner).unwrap();
        assert_eq!(status, ToolStatus::AlreadyInstalled);
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn missing_tool_is_installed() {
        let probe = FixedProbe::with(&[]);
        let runner = RecordingRunner::new();
        let status = ensure_installed(&COOKIECUTTER, &probe, &runner).unwrap();
        assert_eq!(status, ToolStatus::Installed);
        assert_eq!(runner.calls(), vec!["pip install cookiecutter"]);
        assert_eq!(probe.checked(), vec!["cookiecutter"]);
    }

    #[test]
    fn failed_install_propagates_exit_code() {
        let probe = FixedProbe::with(&[]);
        let runner = RecordingRunner::new().failing("pip install", 2);
        let err = ensure_installed(&TWINE, &probe, &runner).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn assume_installed_always_reports_present() {
        assert!(AssumeInstalled.is_installed("definitely-not-a-real-binary"));
    }
}

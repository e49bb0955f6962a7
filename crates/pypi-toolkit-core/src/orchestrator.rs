//! Action dispatch.
//!
//! An [`Action`] expands to a fixed list of [`Step`]s which run strictly in
//! order. The first failing step returns its error and nothing after it runs;
//! completed steps are not undone.

use std::path::{Path, PathBuf};

use crate::config::ToolkitConfig;
use crate::env::Environment;
use crate::error::Result;
use crate::git::{self, GitIdentity};
use crate::prompt::Prompt;
use crate::runner::CommandRunner;
use crate::shell::{quote_arg, ShellCommand, MASK};
use crate::tools::{self, ToolProbe};
use crate::types::{Action, Step};

pub struct Orchestrator<'a> {
    root: PathBuf,
    config: &'a ToolkitConfig,
    env: &'a Environment,
    runner: &'a dyn CommandRunner,
    probe: &'a dyn ToolProbe,
    prompt: &'a mut dyn Prompt,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        root: &Path,
        config: &'a ToolkitConfig,
        env: &'a Environment,
        runner: &'a dyn CommandRunner,
        probe: &'a dyn ToolProbe,
        prompt: &'a mut dyn Prompt,
    ) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
            env,
            runner,
            probe,
            prompt,
        }
    }

    pub fn run(&mut self, action: Action) -> Result<()> {
        for step in action.steps() {
            tracing::debug!("{action}: starting step {step}");
            self.run_step(*step)?;
        }
        tracing::info!("Process completed successfully.");
        Ok(())
    }

    pub fn run_step(&mut self, step: Step) -> Result<()> {
        match step {
            Step::InitRepository => {
                let identity = GitIdentity::from_env(self.env);
                git::init_repository(&self.root, identity, self.runner, &mut *self.prompt)?;
            }
            Step::ScaffoldProject => {
                tracing::info!("Scaffolding a new project...");
                tools::ensure_installed(&tools::COOKIECUTTER, self.probe, self.runner)?;
                self.runner.run(&self.scaffold_command())?;
            }
            Step::Build => {
                tracing::info!("Building the package...");
                self.runner
                    .run(&ShellCommand::new(self.config.commands.build.as_str()))?;
            }
            Step::Test => {
                tracing::info!("Running tests...");
                self.runner
                    .run(&ShellCommand::new(self.config.commands.test.as_str()))?;
            }
            Step::Upload => {
                // Credentials first: a missing one must not trigger an install.
                let upload = self.upload_command()?;
                tools::ensure_installed(&tools::TWINE, self.probe, self.runner)?;
                tracing::info!("Uploading the package to PyPI...");
                self.runner.run(&upload)?;
            }
        }
        Ok(())
    }

    fn upload_command(&self) -> Result<ShellCommand> {
        let creds = self.env.publish_credentials()?;
        let render = |password: &str| {
            format!(
                "{} upload -u {} -p {} {}",
                tools::TWINE.binary,
                quote_arg(&creds.username),
                password,
                self.config.commands.upload_files,
            )
        };
        Ok(ShellCommand::redacted(
            render(quote_arg(&creds.password).as_str()),
            render(MASK),
        ))
    }

    fn scaffold_command(&self) -> ShellCommand {
        ShellCommand::new(format!(
            "{} {}",
            tools::COOKIECUTTER.binary,
            quote_arg(&self.config.commands.scaffold_template)
        ))
    }
}

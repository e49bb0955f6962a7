//! Local repository bootstrap.
//!
//! `init_repository` is a no-op when `.git` already exists. Otherwise it
//! resolves the commit author (environment first, then the prompt), writes it
//! into the local Git config, and records an initial commit of everything in
//! the project root.

use std::path::Path;

use crate::env::{Environment, GIT_EMAIL, GIT_USER};
use crate::error::Result;
use crate::paths;
use crate::prompt::{ask_non_empty, Prompt};
use crate::runner::CommandRunner;
use crate::shell::{quote_always, ShellCommand};

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Commit author. Either field may be missing until resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitIdentity {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl GitIdentity {
    pub fn from_env(env: &Environment) -> Self {
        Self {
            username: env.git_user.clone(),
            email: env.git_email.clone(),
        }
    }

    pub fn warn_missing(&self) {
        if self.username.is_none() {
            tracing::warn!("Environment variable {GIT_USER} not found.");
        }
        if self.email.is_none() {
            tracing::warn!("Environment variable {GIT_EMAIL} not found.");
        }
    }

    /// Fill in missing fields by prompting until each answer is non-blank.
    pub fn resolve(self, prompt: &mut dyn Prompt) -> Result<ResolvedIdentity> {
        let username = match self.username {
            Some(u) => u,
            None => ask_non_empty(prompt, "Enter your Git username: ")?,
        };
        let email = match self.email {
            Some(e) => e,
            None => ask_non_empty(prompt, "Enter your Git email: ")?,
        };
        Ok(ResolvedIdentity { username, email })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    AlreadyInitialized,
    Initialized,
}

pub fn is_repository(root: &Path) -> bool {
    paths::git_dir(root).exists()
}

/// The five git commands that turn a plain directory into a repository with
/// an attributed first commit, in execution order.
pub fn init_commands(identity: &ResolvedIdentity) -> Vec<ShellCommand> {
    vec![
        ShellCommand::new(format!(
            "git config user.name {}",
            quote_always(&identity.username)
        )),
        ShellCommand::new(format!(
            "git config user.email {}",
            quote_always(&identity.email)
        )),
        ShellCommand::new("git init"),
        ShellCommand::new("git add ."),
        ShellCommand::new(format!(
            "git commit -m {}",
            quote_always(INITIAL_COMMIT_MESSAGE)
        )),
    ]
}

pub fn init_repository(
    root: &Path,
    identity: GitIdentity,
    runner: &dyn CommandRunner,
    prompt: &mut dyn Prompt,
) -> Result<InitOutcome> {
    if is_repository(root) {
        tracing::info!("Git repository already exists.");
        return Ok(InitOutcome::AlreadyInitialized);
    }

    tracing::info!("Initializing a new Git repository...");
    identity.warn_missing();
    let identity = identity.resolve(prompt)?;

    for command in init_commands(&identity) {
        runner.run(&command)?;
    }
    Ok(InitOutcome::Initialized)
}

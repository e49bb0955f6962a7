//! Environment-sourced settings.
//!
//! The process environment is read exactly once, at startup, into an
//! [`Environment`]. Everything downstream receives the resolved values and
//! never calls `std::env::var` itself.

use std::path::Path;

use crate::error::{Result, ToolkitError};

pub const GIT_USER: &str = "GIT_USER";
pub const GIT_EMAIL: &str = "GIT_EMAIL";
pub const PYPI_USERNAME: &str = "PYPI_USERNAME";
pub const PYPI_PASSWORD: &str = "PYPI_PASSWORD";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub git_user: Option<String>,
    pub git_email: Option<String>,
    pub pypi_username: Option<String>,
    pub pypi_password: Option<String>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary lookup. Empty or whitespace-only values count
    /// as unset, matching the non-blank rule for prompted answers.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            git_user: get(GIT_USER),
            git_email: get(GIT_EMAIL),
            pypi_username: get(PYPI_USERNAME),
            pypi_password: get(PYPI_PASSWORD),
        }
    }

    pub fn publish_credentials(&self) -> Result<PublishCredentials> {
        let username = self
            .pypi_username
            .clone()
            .ok_or(ToolkitError::MissingCredential(PYPI_USERNAME))?;
        let password = self
            .pypi_password
            .clone()
            .ok_or(ToolkitError::MissingCredential(PYPI_PASSWORD))?;
        Ok(PublishCredentials { username, password })
    }
}

/// Package index login. Held in memory for one upload, never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct PublishCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for PublishCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishCredentials")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// Load `KEY=value` pairs from `path` into the process environment.
///
/// Variables already set are left untouched. Returns `Ok(false)` when the file
/// does not exist.
pub fn load_env_file(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    dotenvy::from_path(path).map_err(|e| ToolkitError::EnvFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::debug!("loaded environment from {}", path.display());
    Ok(true)
}

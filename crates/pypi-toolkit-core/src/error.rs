use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("unknown action '{0}': expected one of build, test, upload, all, init-repository, scaffold-project")]
    UnknownAction(String),

    #[error("command failed with exit code {code}: {command}")]
    CommandFailed { command: String, code: i32 },

    #[error("failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("missing publish credential: {0} is not set")]
    MissingCredential(&'static str),

    #[error("input closed while waiting for {0}")]
    PromptClosed(String),

    #[error("failed to load env file {path}: {message}")]
    EnvFile { path: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ToolkitError {
    /// Process exit code this error should terminate the invocation with.
    ///
    /// A failed external command hands its own code straight through; every
    /// other failure is reported as 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ToolkitError::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_keeps_child_exit_code() {
        let err = ToolkitError::CommandFailed {
            command: "pytest".into(),
            code: 5,
        };
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn missing_credential_exits_with_one() {
        let err = ToolkitError::MissingCredential("PYPI_PASSWORD");
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "missing publish credential: PYPI_PASSWORD is not set"
        );
    }
}

use crate::error::Result;
use crate::paths;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_BUILD_COMMAND: &str = "python -m build";
pub const LEGACY_BUILD_COMMAND: &str = "python setup.py sdist bdist_wheel";
pub const DEFAULT_TEST_COMMAND: &str = "pytest";
pub const DEFAULT_UPLOAD_FILES: &str = "dist/*";
pub const DEFAULT_SCAFFOLD_TEMPLATE: &str =
    "https://github.com/audreyfeldroy/cookiecutter-pypackage.git";

// ---------------------------------------------------------------------------
// ConfigWarning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub field: &'static str,
    pub message: String,
}

// ---------------------------------------------------------------------------
// CommandConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandConfig {
    #[serde(default = "default_build")]
    pub build: String,
    #[serde(default = "default_test")]
    pub test: String,
    /// Glob handed to twine, expanded by the shell.
    #[serde(default = "default_upload_files")]
    pub upload_files: String,
    #[serde(default = "default_scaffold_template")]
    pub scaffold_template: String,
}

fn default_build() -> String {
    DEFAULT_BUILD_COMMAND.to_string()
}

fn default_test() -> String {
    DEFAULT_TEST_COMMAND.to_string()
}

fn default_upload_files() -> String {
    DEFAULT_UPLOAD_FILES.to_string()
}

fn default_scaffold_template() -> String {
    DEFAULT_SCAFFOLD_TEMPLATE.to_string()
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            build: default_build(),
            test: default_test(),
            upload_files: default_upload_files(),
            scaffold_template: default_scaffold_template(),
        }
    }
}

// ---------------------------------------------------------------------------
// ToolkitConfig
// ---------------------------------------------------------------------------

/// Per-project overrides read from `.pypi-toolkit.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ToolkitConfig {
    #[serde(default)]
    pub commands: CommandConfig,
}

impl ToolkitConfig {
    /// Load the project config, falling back to defaults when the file is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: ToolkitConfig = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let fields = [
            ("commands.build", &self.commands.build),
            ("commands.test", &self.commands.test),
            ("commands.upload_files", &self.commands.upload_files),
            ("commands.scaffold_template", &self.commands.scaffold_template),
        ];
        fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| ConfigWarning {
                field,
                message: format!("{field} is empty"),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = ToolkitConfig::load(dir.path()).unwrap();
        assert_eq!(cfg, ToolkitConfig::default());
        assert_eq!(cfg.commands.build, "python -m build");
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(paths::CONFIG_FILE), "\n").unwrap();
        assert_eq!(
            ToolkitConfig::load(dir.path()).unwrap(),
            ToolkitConfig::default()
        );
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(paths::CONFIG_FILE),
            "commands:\n  build: python setup.py sdist bdist_wheel\n",
        )
        .unwrap();
        let cfg = ToolkitConfig::load(dir.path()).unwrap();
        assert_eq!(cfg.commands.build, LEGACY_BUILD_COMMAND);
        assert_eq!(cfg.commands.test, DEFAULT_TEST_COMMAND);
        assert_eq!(cfg.commands.upload_files, DEFAULT_UPLOAD_FILES);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(paths::CONFIG_FILE), "commands: [oops").unwrap();
        assert!(ToolkitConfig::load(dir.path()).is_err());
    }

    #[test]
    fn validate_flags_empty_commands() {
        let mut cfg = ToolkitConfig::default();
        assert!(cfg.validate().is_empty());
        cfg.commands.test = "  ".into();
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "commands.test");
    }
}

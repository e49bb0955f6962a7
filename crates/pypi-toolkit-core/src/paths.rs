use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File and directory names
// ---------------------------------------------------------------------------

pub const GIT_DIR: &str = ".git";
pub const CONFIG_FILE: &str = ".pypi-toolkit.yaml";
pub const ENV_FILE: &str = ".env";

/// Files whose presence marks a directory as a Python project root.
pub const PROJECT_MARKERS: &[&str] = &[CONFIG_FILE, "pyproject.toml", "setup.py"];

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn git_dir(root: &Path) -> PathBuf {
    root.join(GIT_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn env_file_path(root: &Path) -> PathBuf {
    root.join(ENV_FILE)
}

pub fn is_project_root(dir: &Path) -> bool {
    PROJECT_MARKERS.iter().any(|m| dir.join(m).is_file())
}

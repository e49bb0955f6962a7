//! Shell command lines and argument quoting.

use std::fmt;

/// Placeholder shown in place of a secret.
pub const MASK: &str = "****";

/// Quote a single argument for `sh -c`.
/// - Empty strings become `''`
/// - Strings with shell metacharacters are wrapped in single quotes
/// - Embedded single quotes are escaped
pub fn quote_arg(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }

    const SHELL_META: &[char] = &[
        ' ', '\t', '\n', '\'', '"', '\\', '$', '`', '!', '*', '?', '[', ']', '(', ')', '{', '}',
        '<', '>', '|', '&', ';', '#', '~',
    ];

    if !arg.contains(SHELL_META) {
        return arg.to_string();
    }

    format!("'{}'", arg.replace('\'', "'\\''"))
}

/// Always single-quote a value, even when it has no metacharacters.
pub fn quote_always(arg: &str) -> String {
    format!("'{}'", arg.replace('\'', "'\\''"))
}

/// A command line handed to the system shell.
///
/// A command built with [`ShellCommand::redacted`] carries a second, masked
/// rendering of itself. `Display` and [`ShellCommand::masked`] use that
/// rendering, so log lines and error messages never carry the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    line: String,
    display: Option<String>,
}

impl ShellCommand {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            display: None,
        }
    }

    /// `line` runs; `display` is what gets logged. Build `display` from the
    /// same parts as `line`, with [`MASK`] in place of each secret.
    pub fn redacted(line: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            display: Some(display.into()),
        }
    }

    /// The unmasked line, for the shell only.
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn masked(&self) -> String {
        self.display.clone().unwrap_or_else(|| self.line.clone())
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_arg_simple() {
        assert_eq!(quote_arg("alice"), "alice");
        assert_eq!(quote_arg("dist/x.whl"), "dist/x.whl");
    }

    #[test]
    fn quote_arg_with_spaces() {
        assert_eq!(quote_arg("Ada Lovelace"), "'Ada Lovelace'");
    }

    #[test]
    fn quote_arg_with_single_quote() {
        assert_eq!(quote_arg("it's"), "'it'\\''s'");
    }

    #[test]
    fn quote_arg_empty() {
        assert_eq!(quote_arg(""), "''");
    }

    #[test]
    fn quote_always_wraps_plain_words() {
        assert_eq!(quote_always("Initial commit"), "'Initial commit'");
        assert_eq!(quote_always("bob"), "'bob'");
    }

    #[test]
    fn redacted_command_displays_its_masked_form() {
        let cmd = ShellCommand::redacted(
            "twine upload -u alice -p hunter2 dist/*",
            "twine upload -u alice -p **** dist/*",
        );
        assert_eq!(cmd.to_string(), "twine upload -u alice -p **** dist/*");
        assert!(cmd.line().contains("hunter2"));
    }

    #[test]
    fn plain_command_displays_its_line() {
        let cmd = ShellCommand::new("pytest -x");
        assert_eq!(cmd.masked(), "pytest -x");
        assert_eq!(cmd.to_string(), "pytest -x");
    }
}

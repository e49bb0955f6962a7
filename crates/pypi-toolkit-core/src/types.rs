use crate::error::ToolkitError;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// The workflow selected on the command line. One per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Build,
    Test,
    Upload,
    All,
    InitRepository,
    ScaffoldProject,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[
            Action::Build,
            Action::Test,
            Action::Upload,
            Action::All,
            Action::InitRepository,
            Action::ScaffoldProject,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Build => "build",
            Action::Test => "test",
            Action::Upload => "upload",
            Action::All => "all",
            Action::InitRepository => "init-repository",
            Action::ScaffoldProject => "scaffold-project",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Action::Build => "Build the source distribution and wheel",
            Action::Test => "Run the test suite",
            Action::Upload => "Upload the built distributions to PyPI",
            Action::All => "Build, test and upload, in that order",
            Action::InitRepository => "Create a Git repository with an initial commit",
            Action::ScaffoldProject => "Generate a new package from the project template",
        }
    }

    /// Steps this action performs, in execution order.
    pub fn steps(self) -> &'static [Step] {
        match self {
            Action::Build => &[Step::Build],
            Action::Test => &[Step::Test],
            Action::Upload => &[Step::Upload],
            Action::All => &[Step::Build, Step::Test, Step::Upload],
            Action::InitRepository => &[Step::InitRepository],
            Action::ScaffoldProject => &[Step::ScaffoldProject],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::all()
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ToolkitError::UnknownAction(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    InitRepository,
    ScaffoldProject,
    Build,
    Test,
    Upload,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Step::InitRepository => "init-repository",
            Step::ScaffoldProject => "scaffold-project",
            Step::Build => "build",
            Step::Test => "test",
            Step::Upload => "upload",
        };
        f.write_str(s)
    }
}

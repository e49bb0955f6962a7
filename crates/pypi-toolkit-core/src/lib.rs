pub mod config;
pub mod env;
pub mod error;
pub mod git;
pub mod orchestrator;
pub mod paths;
pub mod prompt;
pub mod runner;
pub mod shell;
pub mod tools;
pub mod types;

pub use error::{Result, ToolkitError};
pub use orchestrator::Orchestrator;
pub use types::{Action, Step};

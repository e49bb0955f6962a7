mod root;

use anyhow::Context;
use clap::builder::{PossibleValue, PossibleValuesParser, TypedValueParser};
use clap::Parser;
use pypi_toolkit_core::{
    config::ToolkitConfig,
    env::{self, Environment},
    paths, prompt,
    runner::{CommandRunner, DryRunRunner, ShellRunner},
    tools::{AssumeInstalled, PathProbe, ToolProbe},
    Action, Orchestrator, ToolkitError,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pypi-toolkit",
    about = "Build, test, and upload Python packages to PyPI, or bootstrap a new project",
    version
)]
struct Cli {
    /// Project root (default: auto-detect from .pypi-toolkit.yaml, pyproject.toml or setup.py)
    #[arg(long, env = "PYPI_TOOLKIT_ROOT")]
    root: Option<PathBuf>,

    /// Env file with KEY=value lines (default: <root>/.env)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Log the commands that would run without running them
    #[arg(long)]
    dry_run: bool,

    /// Action to perform
    #[arg(value_parser = action_parser())]
    action: Action,
}

fn action_parser() -> impl TypedValueParser<Value = Action> {
    PossibleValuesParser::new(
        Action::all()
            .iter()
            .map(|a| PossibleValue::new(a.as_str()).help(a.description())),
    )
    .try_map(|s| s.parse::<Action>())
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        let code = e
            .downcast_ref::<ToolkitError>()
            .map(ToolkitError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!("project root: {}", root.display());

    match &cli.env_file {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("env file not found: {}", path.display());
            }
            env::load_env_file(path)?;
        }
        None => {
            env::load_env_file(&paths::env_file_path(&root))?;
        }
    }
    let environment = Environment::from_process();

    let config = ToolkitConfig::load(&root)
        .with_context(|| format!("failed to load {}", paths::config_path(&root).display()))?;
    for warning in config.validate() {
        tracing::warn!("{}: {}", paths::CONFIG_FILE, warning.message);
    }

    let shell = ShellRunner::new(&root);
    let runner: &dyn CommandRunner = if cli.dry_run { &DryRunRunner } else { &shell };
    let probe: &dyn ToolProbe = if cli.dry_run {
        &AssumeInstalled
    } else {
        &PathProbe
    };
    let mut prompt = prompt::stdin_prompt();

    Orchestrator::new(&root, &config, &environment, runner, probe, &mut prompt).run(cli.action)?;
    Ok(())
}

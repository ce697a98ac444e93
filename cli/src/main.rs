use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tasklist_core::config::{self, Config};
use tasklist_core::{Session, TaskList};
use tracing_subscriber::EnvFilter;

/// Interactive task list reading commands from stdin.
#[derive(Debug, Parser)]
#[command(name = "tasklist", about = "Track projects and tasks from the command line")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Do not print the prompt before each command.
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => config::load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    // Diagnostics go to stderr; stdout carries the command output only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let prompt = if cli.no_prompt { String::new() } else { cfg.prompt };
    let mut session = Session::new(TaskList::new(io::stdout()), prompt);
    session
        .run(io::stdin().lock(), &mut io::stdout())
        .context("session failed")?;
    tracing::debug!("session finished");
    Ok(())
}

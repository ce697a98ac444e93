use clap::Parser;
use std::process::{Command, ExitCode};

#[derive(Debug, Parser)]
#[command(about = "Developer tasks for the tasklist workspace")]
struct Xtask {
    /// Task name (format, check, build, test, ci)
    task: Option<String>,
}

const FMT_CHECK: &[&str] = &["fmt", "--all", "--check"];
const CLIPPY: &[&str] = &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"];
const TEST: &[&str] = &["test", "--workspace"];

fn cargo_steps(task: &str) -> Option<&'static [&'static [&'static str]]> {
    let steps: &'static [&'static [&'static str]] = match task {
        "format" => &[&["fmt", "--all"]],
        "check" => &[FMT_CHECK, CLIPPY],
        "build" => &[&["build", "--workspace"]],
        "test" => &[TEST],
        "ci" => &[FMT_CHECK, CLIPPY, TEST],
        _ => return None,
    };
    Some(steps)
}

fn main() -> ExitCode {
    let cli = Xtask::parse();

    let Some(task) = cli.task.as_deref() else {
        println!("Available tasks: format, check, build, test, ci.");
        return ExitCode::SUCCESS;
    };
    let Some(steps) = cargo_steps(task) else {
        println!("Unknown task `{}`. Try format, check, build, test, or ci.", task);
        return ExitCode::FAILURE;
    };

    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    for args in steps.iter().copied() {
        println!("$ cargo {}", args.join(" "));
        match Command::new(&cargo).args(args).status() {
            Ok(status) if status.success() => {}
            Ok(status) => {
                eprintln!("cargo {} failed: {status}", args[0]);
                return ExitCode::FAILURE;
            }
            Err(err) => {
                eprintln!("failed to spawn cargo: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

//! Command dispatch and the prompt/read loop.

use crate::command::{Command, COMMAND_NAMES};
use crate::store::TaskStore;
use crate::{Error, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const QUIT_LINE: &str = "quit";

/// Whether the read loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Trait describing how one input line is executed.
pub trait CommandRunner {
    fn run(&mut self, line: &str) -> Result<Flow>;
}

/// Interpreter owning the task store and the output sink.
pub struct TaskList<W> {
    store: TaskStore,
    out: W,
}

impl<W: Write> TaskList<W> {
    pub fn new(out: W) -> Self {
        Self::with_store(TaskStore::new(), out)
    }

    pub fn with_store(store: TaskStore, out: W) -> Self {
        Self { store, out }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn execute(&mut self, command: Command<'_>) -> Result<()> {
        match command {
            Command::Show => self.store.render(&mut self.out),
            Command::AddProject(name) => {
                self.store.add_project(name);
                Ok(())
            }
            Command::AddTask {
                project,
                description,
            } => self.store.add_task(project, description).map(|_| ()),
            Command::Check(id) => {
                self.store.set_done(id, true);
                Ok(())
            }
            Command::Uncheck(id) => {
                self.store.set_done(id, false);
                Ok(())
            }
            Command::Help => self.help(),
            // Only the bare `quit` line stops the loop.
            Command::Quit => Ok(()),
        }
    }

    fn help(&mut self) -> Result<()> {
        writeln!(self.out, "Commands:")?;
        for name in COMMAND_NAMES {
            writeln!(self.out, "  {name}")?;
        }
        Ok(())
    }
}

impl<W: Write> CommandRunner for TaskList<W> {
    fn run(&mut self, line: &str) -> Result<Flow> {
        if line == QUIT_LINE {
            debug!("quit received");
            return Ok(Flow::Quit);
        }

        let outcome = Command::parse(line).and_then(|command| self.execute(command));
        match outcome {
            Ok(()) => {}
            Err(err @ (Error::UnknownCommand(_) | Error::ProjectNotFound(_))) => {
                writeln!(self.out, "{err}")?;
            }
            Err(
                err @ (Error::UnknownAddTarget(_)
                | Error::MissingArgument(_)
                | Error::InvalidTaskId(_)),
            ) => {
                warn!(line, error = %err, "ignoring command");
            }
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }
}

/// Prompt-driven read loop over a line source.
pub struct Session<R> {
    runner: R,
    prompt: String,
}

impl<R: CommandRunner> Session<R> {
    pub fn new(runner: R, prompt: impl Into<String>) -> Self {
        Self {
            runner,
            prompt: prompt.into(),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Read and execute lines until `quit` or end of input. The prompt is
    /// written to `prompt_out` and flushed before every read. Bytes that are
    /// not UTF-8 are decoded lossily; only a failed read ends the session
    /// with an error.
    pub fn run(&mut self, mut input: impl BufRead, prompt_out: &mut impl Write) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(prompt_out, "{}", self.prompt)?;
            prompt_out.flush()?;
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("input closed");
                return Ok(());
            }
            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            if self.runner.run(&line)? == Flow::Quit {
                return Ok(());
            }
        }
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

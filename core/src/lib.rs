//! Core crate for the interactive task list: command parsing, the in-memory
//! task store, and the read loop that ties them to an output sink.

pub mod command;
pub mod config;
pub mod session;
pub mod store;

pub use command::{Command, COMMAND_NAMES};
pub use config::Config;
pub use session::{CommandRunner, Flow, Session, TaskList};
pub use store::{Project, Task, TaskId, TaskStore};

use thiserror::Error;

/// Common error type for the task list core.
#[derive(Debug, Error)]
pub enum Error {
    /// The command word is not one of [`COMMAND_NAMES`].
    #[error("Invalid command: {0}")]
    UnknownCommand(String),
    /// `add` was followed by something other than `project` or `task`.
    #[error("unknown add target `{0}`")]
    UnknownAddTarget(String),
    /// A command that needs an argument was given none.
    #[error("`{0}` requires an argument")]
    MissingArgument(&'static str),
    /// `check`/`uncheck` argument is not a task id.
    #[error("invalid task id `{0}`")]
    InvalidTaskId(String),
    /// `add task` named a project that does not exist.
    #[error("Could not find a project with the name \"{0}\".")]
    ProjectNotFound(String),
    /// The config file is not valid TOML for [`Config`].
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenient alias for results returned by the core crate.
pub type Result<T> = std::result::Result<T, Error>;

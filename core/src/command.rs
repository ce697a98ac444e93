//! Parsing of a single input line into a [`Command`].

use crate::store::TaskId;
use crate::{Error, Result};

/// Recognized command words, in the order `help` lists them.
pub const COMMAND_NAMES: [&str; 6] = ["show", "add", "check", "uncheck", "help", "quit"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Show,
    AddProject(&'a str),
    AddTask {
        project: &'a str,
        description: &'a str,
    },
    Check(TaskId),
    Uncheck(TaskId),
    Help,
    Quit,
}

impl<'a> Command<'a> {
    /// Split `line` into a command word and the unsplit remainder, then map
    /// the word onto a command. Arguments after argument-less commands are
    /// ignored.
    pub fn parse(line: &'a str) -> Result<Self> {
        let (name, rest) = split_word(line);
        match name {
            "show" => Ok(Command::Show),
            "add" => parse_add(rest),
            "check" => Ok(Command::Check(required(rest, "check")?.parse()?)),
            "uncheck" => Ok(Command::Uncheck(required(rest, "uncheck")?.parse()?)),
            "help" => Ok(Command::Help),
            "quit" => Ok(Command::Quit),
            other => Err(Error::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_add(rest: Option<&str>) -> Result<Command<'_>> {
    let (target, rest) = split_word(required(rest, "add")?);
    match target {
        "project" => Ok(Command::AddProject(required(rest, "add project")?)),
        "task" => {
            let (project, description) = split_word(required(rest, "add task")?);
            Ok(Command::AddTask {
                project,
                description: unquote(description.unwrap_or("")),
            })
        }
        other => Err(Error::UnknownAddTarget(other.to_string())),
    }
}

/// First word and the remainder after the single separating whitespace
/// character, kept exactly as typed.
fn split_word(text: &str) -> (&str, Option<&str>) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, Some(rest)),
        None => (text, None),
    }
}

fn required<'a>(rest: Option<&'a str>, command: &'static str) -> Result<&'a str> {
    rest.filter(|rest| !rest.is_empty())
        .ok_or(Error::MissingArgument(command))
}

/// Strip one pair of surrounding double quotes.
fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> TaskId {
        raw.parse().expect("task id")
    }

    #[test]
    fn parses_every_command() {
        assert_eq!(Command::parse("show").unwrap(), Command::Show);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("check 3").unwrap(), Command::Check(id("3")));
        assert_eq!(Command::parse("uncheck 12").unwrap(), Command::Uncheck(id("12")));
        assert_eq!(
            Command::parse("add project Secrets").unwrap(),
            Command::AddProject("Secrets")
        );
        assert_eq!(
            Command::parse("add task Secrets Eat more donuts").unwrap(),
            Command::AddTask {
                project: "Secrets",
                description: "Eat more donuts"
            }
        );
    }

    #[test]
    fn project_name_keeps_spaces() {
        assert_eq!(
            Command::parse("add project Side Quests").unwrap(),
            Command::AddProject("Side Quests")
        );
    }

    #[test]
    fn quoted_description_is_unwrapped() {
        assert_eq!(
            Command::parse("add task Secrets \"Eat more donuts\"").unwrap(),
            Command::AddTask {
                project: "Secrets",
                description: "Eat more donuts"
            }
        );
        assert_eq!(unquote("\"half"), "\"half");
        assert_eq!(unquote("\""), "\"");
    }

    #[test]
    fn remainder_keeps_extra_spaces() {
        assert_eq!(
            Command::parse("add task P   d").unwrap(),
            Command::AddTask {
                project: "P",
                description: "  d"
            }
        );
        assert_eq!(Command::parse("check  7").unwrap(), Command::Check(id("7")));
        assert!(matches!(
            Command::parse("add  project p"),
            Err(Error::UnknownAddTarget(target)) if target.is_empty()
        ));
    }

    #[test]
    fn add_task_without_description_is_empty() {
        assert_eq!(
            Command::parse("add task Secrets").unwrap(),
            Command::AddTask {
                project: "Secrets",
                description: ""
            }
        );
    }

    #[test]
    fn trailing_arguments_on_bare_commands_are_ignored() {
        assert_eq!(Command::parse("show everything").unwrap(), Command::Show);
        assert_eq!(Command::parse("quit now").unwrap(), Command::Quit);
    }

    #[test]
    fn unknown_command_keeps_the_word() {
        let err = Command::parse("bogus stuff").unwrap_err();
        assert_eq!(err.to_string(), "Invalid command: bogus");
        assert!(matches!(Command::parse(""), Err(Error::UnknownCommand(name)) if name.is_empty()));
        // command words are case-sensitive
        assert!(matches!(Command::parse("SHOW"), Err(Error::UnknownCommand(_))));
    }

    // Accepted lenient behaviour: these are reported as errors here and
    // swallowed without output by the session.
    #[test]
    fn unknown_add_target() {
        assert!(matches!(
            Command::parse("add milestone v1"),
            Err(Error::UnknownAddTarget(target)) if target == "milestone"
        ));
    }

    #[test]
    fn non_numeric_task_id() {
        assert!(matches!(
            Command::parse("check one"),
            Err(Error::InvalidTaskId(text)) if text == "one"
        ));
    }

    #[test]
    fn missing_arguments() {
        assert!(matches!(Command::parse("add"), Err(Error::MissingArgument("add"))));
        assert!(matches!(
            Command::parse("add project"),
            Err(Error::MissingArgument("add project"))
        ));
        assert!(matches!(Command::parse("uncheck"), Err(Error::MissingArgument("uncheck"))));
        assert!(matches!(Command::parse("check "), Err(Error::MissingArgument("check"))));
    }

    #[test]
    fn help_order_is_fixed() {
        assert_eq!(COMMAND_NAMES, ["show", "add", "check", "uncheck", "help", "quit"]);
    }
}

//! Configuration models and loaders for the task list.

use crate::Result;
use std::path::Path;

/// Runtime settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Text written before every read.
    pub prompt: String,
    /// Log filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: String::from("> "),
            log_filter: String::from("warn"),
        }
    }
}

/// Load configuration from the provided path.
///
/// Expected TOML keys, both optional:
/// - `prompt` as a string
/// - `log_filter` as a tracing filter directive, e.g. `"tasklist_core=debug"`
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<Config> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(parse_config("").expect("parse"), Config::default());
        assert_eq!(Config::default().prompt, "> ");
    }

    #[test]
    fn loads_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tasklist.toml");
        std::fs::write(&path, "prompt = \"tasks> \"\nlog_filter = \"debug\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.prompt, "tasks> ");
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(parse_config("colour = true"), Err(Error::Config(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            load_config(dir.path().join("absent.toml")),
            Err(Error::Io(_))
        ));
    }
}

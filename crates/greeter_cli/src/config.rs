use std::fs;
use std::path::Path;

use greeter_base::{ErrorKind, GreeterResult, ResultExt};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "greeter.toml";

/// Contents of a `greeter.toml` file.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Names greeted when none are given on the command line.
    #[serde(default = "default_names")]
    pub names: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            names: default_names(),
        }
    }
}

/// The default subject followed by one fixed name.
pub fn default_names() -> Vec<String> {
    vec![String::new(), "Rust".to_string()]
}

pub fn load_config(path: &Path) -> GreeterResult<Config> {
    debug!(path = %path.display(), "loading config");
    let text = fs::read_to_string(path).map_err(|source| ErrorKind::FileError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text, path).context("failed to load config")
}

fn parse_config(text: &str, path: &Path) -> GreeterResult<Config> {
    toml::from_str(text).map_err(|err| {
        ErrorKind::ConfigError {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(text: &str) -> GreeterResult<Config> {
        parse_config(text, &PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    #[test]
    fn parses_names() {
        let config = parse(r#"names = ["Go", "", "世界"]"#).unwrap();
        assert_eq!(config.names, vec!["Go", "", "世界"]);
    }

    #[test]
    fn missing_names_fall_back_to_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.names, vec!["", "Rust"]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse(r#"nmes = ["Go"]"#).unwrap_err();
        match err.kind() {
            ErrorKind::ConfigError { path, message } => {
                assert_eq!(path, &PathBuf::from(DEFAULT_CONFIG_FILE));
                assert!(message.contains("nmes"), "unexpected message: {message}");
            }
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn load_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "names = [\"Ferris\"]\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.names, vec!["Ferris"]);
    }

    #[test]
    fn load_config_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::FileError { .. }));
        assert!(err.to_string().starts_with("File error at "));
    }

    #[test]
    fn load_config_adds_context_to_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "names = 42\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert_eq!(err.get_context(), ["failed to load config"]);
        assert!(err.to_string().starts_with("failed to load config: Invalid config at "));
    }
}

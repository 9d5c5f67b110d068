//! evman configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::codec::{Codec, Delimiter};
use crate::error::{EvmanError, EvmanResult};

static DEFAULT_EVENTS_FILE: &str = "events.txt";

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

/// Configuration at ~/.config/evman/config.toml, overridable with
/// `EVMAN_*` environment variables.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EvmanConfig {
    #[serde(default = "default_events_file")]
    pub events_file: PathBuf,

    #[serde(default)]
    pub delimiter: Delimiter,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminConfig>,
}

/// The single admin account.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

impl Default for EvmanConfig {
    fn default() -> Self {
        EvmanConfig {
            events_file: default_events_file(),
            delimiter: Delimiter::default(),
            admin: None,
        }
    }
}

impl EvmanConfig {
    /// Load the user's config, creating a commented-out default file on
    /// first run.
    pub fn load() -> EvmanResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from `path` (optional) plus the environment.
    pub fn load_from(path: &Path) -> EvmanResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("EVMAN"))
            .build()
            .map_err(|e| EvmanError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EvmanError::Config(e.to_string()))
    }

    pub fn config_path() -> EvmanResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EvmanError::Config("Could not determine config directory".into()))?
            .join("evman");

        Ok(config_dir.join("config.toml"))
    }

    /// Events file with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.events_file.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    pub fn codec(&self) -> Codec {
        Codec::new(self.delimiter)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EvmanResult<()> {
        let contents = format!(
            "\
# evman configuration

# Where events are stored:
# events_file = \"{}\"

# Field separator in the events file, \"pipe\" or \"comma\":
# delimiter = \"pipe\"

# Admin account (required for add, delete and edit):
# [admin]
# username = \"admin\"
# password = \"change-me\"
",
            DEFAULT_EVENTS_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EvmanError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EvmanError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Render the effective config as TOML.
    pub fn to_toml(&self) -> EvmanResult<String> {
        toml::to_string_pretty(self).map_err(|e| EvmanError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EvmanConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.events_file, PathBuf::from("events.txt"));
        assert_eq!(config.delimiter, Delimiter::Pipe);
        assert_eq!(config.admin, None);
    }

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evman/config.toml");

        EvmanConfig::create_default_config(&path).unwrap();
        let config = EvmanConfig::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.delimiter, Delimiter::Pipe);
        assert_eq!(config.admin, None);
    }

    #[test]
    fn test_reads_delimiter_and_admin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "events_file = \"/tmp/evman/events.csv\"\n\
             delimiter = \"comma\"\n\
             \n\
             [admin]\n\
             username = \"root\"\n\
             password = \"secret\"\n",
        )
        .unwrap();

        let config = EvmanConfig::load_from(&path).unwrap();

        assert_eq!(config.events_path(), PathBuf::from("/tmp/evman/events.csv"));
        assert_eq!(config.codec().delimiter(), Delimiter::Comma);
        assert_eq!(
            config.admin,
            Some(AdminConfig {
                username: "root".to_string(),
                password: "secret".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_delimiter_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "delimiter = \"tab\"\n").unwrap();

        let err = EvmanConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, EvmanError::Config(_)));
    }

    #[test]
    fn test_to_toml_omits_missing_admin() {
        let toml = EvmanConfig::default().to_toml().unwrap();

        assert!(toml.contains("events_file = \"events.txt\""));
        assert!(toml.contains("delimiter = \"pipe\""));
        assert!(!toml.contains("[admin]"));
    }
}

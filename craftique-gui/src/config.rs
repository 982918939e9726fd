use craftique::config::Timings;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::filter;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Log at debug level if true and no log level is set.
    pub debug: Option<bool>,
    /// Latencies of the mock directory and reset countdown length.
    #[serde(default)]
    pub timings: Timings,
}

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_slice::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    /// Same as [`Config::from_file`] but a missing file is created with the default configuration.
    pub fn from_file_or_init(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::NotFound) => {
                tracing::info!("No configuration file at {}, writing defaults", path.display());
                let config = Self::default();
                if let Err(e) = config.to_file(path) {
                    tracing::warn!("Failed to write default configuration: {}", e);
                }
                Ok(config)
            }
            res => res,
        }
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file.write_all(content.as_bytes()).map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            ConfigError::WritingFile(e.to_string())
        })?;

        tracing::info!("Done writing gui configuration file");
        Ok(())
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
    WritingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_FILE_NAME);
        assert_eq!(Config::from_file(&path), Err(ConfigError::NotFound));
        assert_eq!(Config::from_file_or_init(&path), Ok(Config::default()));
        // Defaults are written for the next start.
        assert!(path.exists());
        assert_eq!(Config::from_file(&path), Ok(Config::default()));
    }

    #[test]
    fn unwritable_location_still_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join(DEFAULT_FILE_NAME);
        assert_eq!(Config::from_file_or_init(&path), Ok(Config::default()));
        assert!(!path.exists());
    }

    #[test]
    fn write_then_read() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_FILE_NAME);
        let config = Config {
            log_level: Some("trace".to_string()),
            debug: None,
            timings: Timings {
                check_delay_ms: 10,
                submit_delay_ms: 20,
                countdown_secs: 3,
            },
        };
        config.to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path), Ok(config));
    }

    #[test]
    fn partial_file_keeps_default_timings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "debug = true\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.timings, Timings::default());
        assert_eq!(config.log_level(), Ok(filter::LevelFilter::DEBUG));
    }

    #[test]
    fn invalid_files_are_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_FILE_NAME);

        std::fs::write(&path, "log_level = \"loud\"\n").unwrap();
        assert!(matches!(
            Config::from_file_or_init(&path),
            Err(ConfigError::InvalidField("log_level", _))
        ));

        std::fs::write(&path, "log_level = [\n").unwrap();
        assert!(matches!(
            Config::from_file_or_init(&path),
            Err(ConfigError::ReadingFile(_))
        ));
    }

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(Config::default().log_level(), Ok(filter::LevelFilter::INFO));
    }
}

//! Application configuration, stored as RON.
//!
//! Every field is optional in the file; missing ones take the defaults below.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use report_form_core::STATUS_PERIOD;
use report_form_engine::{AtomicFileWriter, ClientSettings, EngineConfig, PersistError};
use report_logging::LogDestination;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "report_form.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("could not serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("could not write config: {0}")]
    Write(#[from] PersistError),
    #[error("invalid base_url {url:?}: {source}")]
    BaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogTarget {
    #[default]
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    /// `None` lets report generation take as long as the server needs.
    pub request_timeout_secs: Option<u64>,
    pub output_dir: PathBuf,
    pub log_target: LogTarget,
    pub log_level: String,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: None,
            output_dir: PathBuf::from("reports"),
            log_target: LogTarget::File,
            log_level: "info".to_string(),
            log_file: PathBuf::from(report_logging::DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let base_url = Url::parse(&self.base_url).map_err(|source| ConfigError::BaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        let mut client = ClientSettings::new(base_url);
        client.connect_timeout = Duration::from_secs(self.connect_timeout_secs);
        client.request_timeout = self.request_timeout_secs.map(Duration::from_secs);

        Ok(EngineConfig {
            client,
            output_dir: self.output_dir.clone(),
            status_period: STATUS_PERIOD,
        })
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        report_logging::parse_level(&self.log_level)
            .ok_or_else(|| ConfigError::LogLevel(self.log_level.clone()))
    }
}

pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    Ok(ron::from_str(text)?)
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text)
}

/// Writes `config` to `path`, replacing any existing file.
pub fn save_config(path: &Path, config: &AppConfig) -> Result<PathBuf, ConfigError> {
    let pretty = ron::ser::PrettyConfig::new();
    let text = ron::ser::to_string_pretty(config, pretty)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_CONFIG_FILE);
    Ok(AtomicFileWriter::new(dir).write(filename, text.as_bytes())?)
}

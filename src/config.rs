use anyhow::Context;
use camino::{
    Utf8Path,
    Utf8PathBuf,
};
use serde::Deserialize;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

fn default_random_opening() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Whether the computer opens on a random tile when it moves first.
    #[serde(default = "default_random_opening")]
    pub random_opening: bool,

    /// A seed for the random opening, for repeatable games.
    #[serde(default)]
    pub seed: Option<u64>,

    /// A file to write logs to, as well as the stderr.
    #[serde(default)]
    pub log_file: Option<Utf8PathBuf>,

    /// The log filter, used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(flatten)]
    pub extra: HashMap<String, toml::Value>,
}

impl Config {
    /// Load a config from a path
    pub fn load_from_path(path: &Utf8Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from `{path}`"))
            .and_then(|s| Self::load_from_str(&s))
    }

    /// Load a config from a str
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("failed to parse config")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        for key in self.extra.keys() {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::UnknownKey(key.clone()),
            });
        }

        if let Some(log_file) = self.log_file.as_ref() {
            if log_file.file_name().is_none() {
                errors.push(ValidationMessage {
                    severity: Severity::Error,
                    error: ValidationError::InvalidLogFile(log_file.clone()),
                });
            }
        }

        if let Err(error) = EnvFilter::try_new(&self.log_filter) {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::InvalidLogFilter {
                    filter: self.log_filter.clone(),
                    message: error.to_string(),
                },
            });
        }

        errors
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            random_opening: default_random_opening(),
            seed: None,
            log_file: None,
            log_filter: default_log_filter(),
            extra: HashMap::new(),
        }
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown key `{0}`")]
    UnknownKey(String),

    #[error("log file `{0}` has no file name")]
    InvalidLogFile(Utf8PathBuf),

    #[error("invalid log filter `{filter}`: {message}")]
    InvalidLogFilter { filter: String, message: String },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

use thiserror::Error;

use crate::app::book::BookError;
use crate::domain::error::SettlementError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Match script errors.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("failed to read match script: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse match script: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid match script: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Settlement(#[from] SettlementError),

    #[error(transparent)]
    Book(#[from] BookError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

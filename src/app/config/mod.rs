//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every section is optional and
//! falls back to its defaults. `PUNTER_LOG_LEVEL` overrides `[logging] level`.
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "pretty"
//!
//! [book]
//! default_bankroll = 1000
//! default_odds = 1.90
//! max_stake = 250
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::{Odds, Stake};
use crate::error::{ConfigError, Result};

mod logging;

pub use logging::{LoggingConfig, LOG_FORMATS};

/// Environment variable that overrides the configured log level.
pub const LOG_LEVEL_ENV: &str = "PUNTER_LOG_LEVEL";

/// Sportsbook defaults and limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BookConfig {
    /// Bankroll for characters that do not specify one.
    pub default_bankroll: Decimal,
    /// Decimal odds for bets that do not specify them.
    pub default_odds: Odds,
    /// Largest single stake the book accepts. `None` means unlimited.
    pub max_stake: Option<Stake>,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            default_bankroll: dec!(1000),
            default_odds: dec!(1.90),
            max_stake: None,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub book: BookConfig,
}

impl Config {
    /// Load, override from the environment, and validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse(&content)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied, for runs without a file.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate TOML without touching the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = Self::parse(content)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            self.logging.level = level;
        }
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "logging.level",
            }
            .into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "'{}' is not one of {}",
                    self.logging.format,
                    LOG_FORMATS.join(", ")
                ),
            }
            .into());
        }
        if self.book.default_bankroll <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "default_bankroll",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.book.default_odds < Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: "default_odds",
                reason: "decimal odds must be at least 1".into(),
            }
            .into());
        }
        if let Some(max_stake) = self.book.max_stake {
            if max_stake <= Decimal::ZERO {
                return Err(ConfigError::InvalidValue {
                    field: "max_stake",
                    reason: "must be positive".into(),
                }
                .into());
            }
        }
        Ok(())
    }
}

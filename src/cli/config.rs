//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::app::Config;
use crate::cli::{diagnostic, output};
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../punter.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!(
        "2. Run: punter config validate -c {}",
        path.display()
    ));
    output::note(&format!(
        "3. Run: punter simulate demos/match.toml -c {}",
        path.display()
    ));
    Ok(())
}

/// Load a configuration file, showing a source snippet on syntax errors.
pub fn load(path: &Path) -> Result<Config> {
    diagnostic::annotate(Config::load(path), path)
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    load(path)?;
    output::success(&format!("{} is valid", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = load(path)?;
    if output::record("config", &config)? {
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Book");
    output::field("Bankroll", config.book.default_bankroll.normalize());
    output::field("Odds", config.book.default_odds.normalize());
    match config.book.max_stake {
        Some(limit) => output::field("Max stake", limit.normalize()),
        None => output::field("Max stake", "unlimited"),
    }
    Ok(())
}

//! Command-line interface.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod emotion;
pub mod output;
pub mod settle;
pub mod simulate;

pub use command::{Cli, ColorChoice, Commands, ConfigCommand};

use crate::app::{Config, LoggingConfig};
use crate::error::Result;

/// Raise the log level for `-v` flags and switch to JSON logs in JSON mode.
fn logging_for(base: &LoggingConfig, verbose: u8, json: bool) -> LoggingConfig {
    let mut logging = base.clone();
    match verbose {
        0 => {}
        1 => logging.level = "info".into(),
        _ => logging.level = "debug".into(),
    }
    if json {
        logging.format = "json".into();
    }
    logging
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, &cli.color));

    let config = match &cli.command {
        Commands::Simulate(args) => match &args.config {
            Some(path) => config::load(path)?,
            None => Config::from_env()?,
        },
        _ => Config::from_env()?,
    };
    logging_for(&config.logging, cli.verbose, cli.json).init();

    match &cli.command {
        Commands::Settle(args) => settle::execute(args),
        Commands::Emotion(args) => emotion::execute(args),
        Commands::Simulate(args) => simulate::execute(args, &config),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Validate(arg)) => config::execute_validate(&arg.config),
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(&arg.config),
    }
}

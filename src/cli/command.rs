//! Clap command tree.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use crate::domain::{OutcomeClass, ScoreSnapshot, SelectionType};

/// Punter - Asian handicap and totals settlement with emotional punters.
#[derive(Parser, Debug)]
#[command(name = "punter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Emit machine-readable JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase verbosity (-v info logs, -vv debug logs)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a bet against a score and optionally compute its payout
    Settle(SettleArgs),

    /// Show the emotion a punter feels about an outcome
    Emotion(EmotionArgs),

    /// Play a match script through the sportsbook
    Simulate(SimulateArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `punter config`
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented configuration template
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ConfigPathArg),
    /// Show the effective configuration
    Show(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "punter.toml")]
    pub config: PathBuf,
}

/// Arguments for `config init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the template
    #[arg(default_value = "punter.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `settle` subcommand.
#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Bet selection (home, away, over, under)
    #[arg(short, long)]
    pub selection: SelectionType,

    /// Handicap or totals line, e.g. -0.75 or 2.5
    #[arg(short, long, allow_hyphen_values = true)]
    pub line: Decimal,

    /// Score to evaluate against, e.g. 2-1
    #[arg(long)]
    pub score: ScoreSnapshot,

    /// Score when the bet was placed (in-play handicap bets)
    #[arg(long)]
    pub bet_time_score: Option<ScoreSnapshot>,

    /// Stake, enables payout calculation
    #[arg(long, requires = "odds")]
    pub stake: Option<Decimal>,

    /// Decimal odds
    #[arg(long, requires = "stake")]
    pub odds: Option<Decimal>,

    /// Treat the score as live rather than final
    #[arg(long)]
    pub in_progress: bool,
}

/// Arguments for the `emotion` subcommand.
#[derive(Args, Debug)]
pub struct EmotionArgs {
    /// Outcome class (win, half-win, push, half-loss, loss); omit for a pending bet
    pub outcome: Option<OutcomeClass>,

    /// Map as a live, unfinished bet
    #[arg(long)]
    pub in_progress: bool,
}

/// Arguments for the `simulate` subcommand.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Match script (TOML)
    pub script: PathBuf,

    /// Configuration file with sportsbook defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

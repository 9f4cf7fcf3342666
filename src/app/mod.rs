//! Application layer - configuration, the sportsbook, and match simulation.

pub mod book;
pub mod config;
pub mod simulation;

pub use book::{Bet, BetSlip, BetStatus, BookError, Character, MoodChange, Settlement, Sportsbook};
pub use config::{BookConfig, Config, LoggingConfig};
pub use simulation::{run, MatchScript, SimulationReport, TimelineEvent};

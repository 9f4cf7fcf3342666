//! Punter - bet settlement for a match-day simulation.
//!
//! Fictional characters place Asian Handicap and goal-line bets, sweat over
//! a live score, and are settled at full time. This crate holds the
//! settlement engine and the bookkeeping around it.
//!
//! # Modules
//!
//! - [`domain`] - The pure settlement core: selections, scores, outcome
//!   classification, payouts and emotion tables
//! - [`app`] - Configuration, the [`app::Sportsbook`] ledger that owns all
//!   mutable bet and bankroll state, and scripted match simulation
//! - [`cli`] - Command-line front end
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use punter::domain::{
//!     classify_outcome, compute_payout, map_settled_emotion, OutcomeClass, ScoreSnapshot,
//!     SelectionType,
//! };
//! use rust_decimal_macros::dec;
//!
//! let score: ScoreSnapshot = "2-1".parse().unwrap();
//! let outcome = classify_outcome(SelectionType::HomeTeam, dec!(-0.5), None, score).unwrap();
//! assert_eq!(outcome.class, OutcomeClass::Win);
//!
//! let payout = compute_payout(outcome.class, dec!(100), dec!(1.86)).unwrap();
//! assert_eq!(payout, dec!(186));
//! assert_eq!(map_settled_emotion(outcome.class).label, "ecstatic");
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;

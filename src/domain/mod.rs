//! Bet settlement domain logic.
//!
//! The settlement core ([`classify_outcome`], [`compute_payout`]) and the
//! emotion tables ([`map_settled_emotion`], [`map_in_progress_emotion`]) are
//! pure functions over plain values. They hold no state and perform no I/O,
//! so they can be called from any number of threads without coordination.

mod emotion;
mod ids;
mod money;
mod outcome;
mod score;
mod selection;
mod settlement;

pub mod error;

pub use emotion::{map_in_progress_emotion, map_settled_emotion, pending_emotion, EmotionToken};
pub use error::SettlementError;
pub use ids::{BetId, CharacterId};
pub use money::{Odds, Payout, Stake};
pub use outcome::{Outcome, OutcomeClass, ParseOutcomeError};
pub use score::ScoreSnapshot;
pub use selection::{BetSelection, SelectionType};
pub use settlement::{
    classify_margin, classify_outcome, compute_payout, settle, validate_wager, BetContext,
    SettlementResult,
};

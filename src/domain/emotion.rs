//! Display-only emotion tokens derived from outcomes.
//!
//! Two tables exist. The settled table is used once a bet is final and
//! spans the full range from ecstatic to devastated. The in-progress table
//! is used while a match is still running and only says whether things look
//! good, bad or level, because a live classification can still change.

use std::fmt;

use serde::Serialize;

use super::outcome::OutcomeClass;

/// A symbol and label a character shows on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EmotionToken {
    pub symbol: &'static str,
    pub label: &'static str,
}

impl EmotionToken {
    const fn new(symbol: &'static str, label: &'static str) -> Self {
        Self { symbol, label }
    }

    pub const ECSTATIC: Self = Self::new("🤑", "ecstatic");
    pub const PLEASED: Self = Self::new("😊", "pleased");
    pub const NEUTRAL: Self = Self::new("😐", "neutral");
    pub const DISAPPOINTED: Self = Self::new("😕", "disappointed");
    pub const DEVASTATED: Self = Self::new("😭", "devastated");
    pub const HOPEFUL: Self = Self::new("🤞", "hopeful");
    pub const WORRIED: Self = Self::new("😰", "worried");
    pub const WAITING: Self = Self::new("🤔", "waiting");
}

impl Default for EmotionToken {
    fn default() -> Self {
        Self::WAITING
    }
}

impl fmt::Display for EmotionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.label)
    }
}

/// Emotion for a final settlement.
#[must_use]
pub const fn map_settled_emotion(outcome: OutcomeClass) -> EmotionToken {
    match outcome {
        OutcomeClass::Win => EmotionToken::ECSTATIC,
        OutcomeClass::HalfWin => EmotionToken::PLEASED,
        OutcomeClass::Push => EmotionToken::NEUTRAL,
        OutcomeClass::HalfLoss => EmotionToken::DISAPPOINTED,
        OutcomeClass::Loss => EmotionToken::DEVASTATED,
    }
}

/// Emotion for a provisional, mid-match classification.
#[must_use]
pub const fn map_in_progress_emotion(outcome: OutcomeClass) -> EmotionToken {
    match outcome {
        OutcomeClass::Win | OutcomeClass::HalfWin => EmotionToken::HOPEFUL,
        OutcomeClass::Push => EmotionToken::NEUTRAL,
        OutcomeClass::HalfLoss | OutcomeClass::Loss => EmotionToken::WORRIED,
    }
}

/// Emotion before any classification exists.
#[must_use]
pub const fn pending_emotion() -> EmotionToken {
    EmotionToken::WAITING
}

//! Outcome classes produced by settlement.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The five possible results of an Asian Handicap or goal-line bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeClass {
    Win,
    HalfWin,
    Push,
    HalfLoss,
    Loss,
}

impl OutcomeClass {
    /// All classes from best to worst.
    pub const ALL: [Self; 5] = [
        Self::Win,
        Self::HalfWin,
        Self::Push,
        Self::HalfLoss,
        Self::Loss,
    ];

    /// Returns true for `Win` and `HalfWin`.
    #[must_use]
    pub const fn is_winning(&self) -> bool {
        matches!(self, Self::Win | Self::HalfWin)
    }

    /// Returns true for `Loss` and `HalfLoss`.
    #[must_use]
    pub const fn is_losing(&self) -> bool {
        matches!(self, Self::Loss | Self::HalfLoss)
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Win => "Win",
            Self::HalfWin => "Half Win",
            Self::Push => "Push",
            Self::HalfLoss => "Half Loss",
            Self::Loss => "Loss",
        };
        f.write_str(label)
    }
}

/// Error returned when text does not name an outcome class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown outcome '{0}': expected win, half-win, push, half-loss or loss")]
pub struct ParseOutcomeError(pub String);

impl FromStr for OutcomeClass {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();

        match normalized.as_str() {
            "win" => Ok(Self::Win),
            "halfwin" => Ok(Self::HalfWin),
            "push" => Ok(Self::Push),
            "halfloss" => Ok(Self::HalfLoss),
            "loss" => Ok(Self::Loss),
            _ => Err(ParseOutcomeError(s.to_string())),
        }
    }
}

/// A classified outcome with the margin that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub class: OutcomeClass,
    /// Adjusted goal difference (handicap) or total difference (goal line).
    pub margin: Decimal,
    /// Free-text suffix describing the margin, for display only.
    pub detail: String,
}

impl Outcome {
    pub(crate) fn new(class: OutcomeClass, margin: Decimal) -> Self {
        let margin = margin.normalize();
        let detail = if margin > Decimal::ZERO {
            format!("(margin +{margin})")
        } else {
            format!("(margin {margin})")
        };
        Self {
            class,
            margin,
            detail,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.class, self.detail)
    }
}

//! Bet selections: which side of a market a bet is on.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::SettlementError;

/// The four supported selection kinds.
///
/// `HomeTeam` and `AwayTeam` are Asian Handicap selections where `line` is a
/// signed goal handicap. `Over` and `Under` are goal-line (totals) selections
/// where `line` is the total goals threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SelectionType {
    HomeTeam,
    AwayTeam,
    Over,
    Under,
}

impl SelectionType {
    /// All selection kinds, in display order.
    pub const ALL: [Self; 4] = [Self::HomeTeam, Self::AwayTeam, Self::Over, Self::Under];

    /// Returns true for handicap selections.
    #[must_use]
    pub const fn is_handicap(&self) -> bool {
        matches!(self, Self::HomeTeam | Self::AwayTeam)
    }

    /// Returns true for totals selections.
    #[must_use]
    pub const fn is_total(&self) -> bool {
        matches!(self, Self::Over | Self::Under)
    }

    /// Short lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HomeTeam => "home",
            Self::AwayTeam => "away",
            Self::Over => "over",
            Self::Under => "under",
        }
    }
}

impl fmt::Display for SelectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionType {
    type Err = SettlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "home_team" | "hometeam" => Ok(Self::HomeTeam),
            "away" | "away_team" | "awayteam" => Ok(Self::AwayTeam),
            "over" => Ok(Self::Over),
            "under" => Ok(Self::Under),
            _ => Err(SettlementError::InvalidSelection {
                input: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for SelectionType {
    type Error = SettlementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SelectionType> for String {
    fn from(kind: SelectionType) -> Self {
        kind.as_str().to_string()
    }
}

/// A selection together with its handicap or totals line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetSelection {
    pub kind: SelectionType,
    pub line: Decimal,
}

impl BetSelection {
    #[must_use]
    pub const fn new(kind: SelectionType, line: Decimal) -> Self {
        Self { kind, line }
    }
}

impl fmt::Display for BetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_handicap() && self.line >= Decimal::ZERO {
            write!(f, "{} +{}", self.kind, self.line.normalize())
        } else {
            write!(f, "{} {}", self.kind, self.line.normalize())
        }
    }
}

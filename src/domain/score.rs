//! Match score snapshots.
//!
//! Scores arrive from live feeds as `"H-A"` strings. [`ScoreSnapshot`] is the
//! parsed form the settlement core works with.
//!
//! # Examples
//!
//! ```
//! use punter::domain::ScoreSnapshot;
//!
//! let score: ScoreSnapshot = "5 - 0".parse().unwrap();
//! assert_eq!(score, ScoreSnapshot::new(5, 0));
//! assert_eq!(score.to_string(), "5-0");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SettlementError;

/// Goals scored by each side at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScoreSnapshot {
    /// Home side goals.
    pub home: u32,
    /// Away side goals.
    pub away: u32,
}

impl ScoreSnapshot {
    /// The score before kickoff.
    pub const KICKOFF: Self = Self { home: 0, away: 0 };

    /// Create a snapshot from goal counts.
    #[must_use]
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Total goals scored by both sides.
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.home) + u64::from(self.away)
    }

    /// Returns true if neither side has fewer goals than in `earlier`.
    ///
    /// Goal counts never go down during a match, so a later snapshot
    /// must follow on from every earlier one.
    #[must_use]
    pub const fn follows(&self, earlier: &Self) -> bool {
        self.home >= earlier.home && self.away >= earlier.away
    }
}

impl fmt::Display for ScoreSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

impl FromStr for ScoreSnapshot {
    type Err = SettlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| SettlementError::InvalidScore {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (home, away) = s
            .split_once('-')
            .ok_or_else(|| invalid("expected the form H-A"))?;

        if away.contains('-') {
            return Err(invalid("expected exactly one '-' separator"));
        }

        let parse_side = |side: &str, name: &str| {
            let side = side.trim();
            if side.is_empty() {
                return Err(invalid(&format!("missing {name} goals")));
            }
            side.parse::<u32>()
                .map_err(|_| invalid(&format!("{name} goals must be a non-negative integer")))
        };

        Ok(Self {
            home: parse_side(home, "home")?,
            away: parse_side(away, "away")?,
        })
    }
}

impl TryFrom<String> for ScoreSnapshot {
    type Error = SettlementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScoreSnapshot> for String {
    fn from(score: ScoreSnapshot) -> Self {
        score.to_string()
    }
}

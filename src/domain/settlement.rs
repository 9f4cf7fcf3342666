//! Bet settlement: outcome classification and payout.
//!
//! Everything here is a pure function of its arguments. Nothing is logged,
//! cached or defaulted; invalid input is returned as a [`SettlementError`].
//!
//! # Quarter lines
//!
//! Goal counts are integers, so when a line is a multiple of 0.25 the margin
//! `goal_diff + line` (or `total - line`) is itself a multiple of 0.25. That
//! makes the five-way table below exhaustive:
//!
//! | margin   | outcome   |
//! |----------|-----------|
//! | >= 0.5   | Win       |
//! | 0.25     | Half Win  |
//! | 0        | Push      |
//! | -0.25    | Half Loss |
//! | <= -0.5  | Loss      |
//!
//! # Examples
//!
//! ```
//! use punter::domain::{
//!     classify_outcome, compute_payout, OutcomeClass, ScoreSnapshot, SelectionType,
//! };
//! use rust_decimal_macros::dec;
//!
//! let outcome = classify_outcome(
//!     SelectionType::Over,
//!     dec!(2.75),
//!     None,
//!     ScoreSnapshot::new(2, 1),
//! )
//! .unwrap();
//! assert_eq!(outcome.class, OutcomeClass::HalfWin);
//!
//! let payout = compute_payout(outcome.class, dec!(100), dec!(1.86)).unwrap();
//! assert_eq!(payout, dec!(143));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use super::error::SettlementError;
use super::money::{Odds, Payout, Stake};
use super::outcome::{Outcome, OutcomeClass};
use super::score::ScoreSnapshot;
use super::selection::{BetSelection, SelectionType};

const QUARTER: Decimal = dec!(0.25);
const HALF: Decimal = dec!(0.5);
const THREE_QUARTERS: Decimal = dec!(0.75);

/// Everything needed to classify a bet against a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetContext {
    pub selection: BetSelection,
    /// Score when the bet was placed. `None` means kickoff (0-0).
    pub bet_time_score: Option<ScoreSnapshot>,
    /// Score to evaluate against, live or final.
    pub current_score: ScoreSnapshot,
}

impl BetContext {
    #[must_use]
    pub const fn new(
        selection: BetSelection,
        bet_time_score: Option<ScoreSnapshot>,
        current_score: ScoreSnapshot,
    ) -> Self {
        Self {
            selection,
            bet_time_score,
            current_score,
        }
    }

    /// Classify this context. See [`classify_outcome`].
    pub fn classify(&self) -> Result<Outcome, SettlementError> {
        classify_outcome(
            self.selection.kind,
            self.selection.line,
            self.bet_time_score,
            self.current_score,
        )
    }
}

/// Final classification and payout of a settled bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettlementResult {
    pub outcome: OutcomeClass,
    pub payout: Payout,
}

impl SettlementResult {
    /// Compute the payout for `outcome` and wrap both.
    pub fn new(outcome: OutcomeClass, stake: Stake, odds: Odds) -> Result<Self, SettlementError> {
        let payout = compute_payout(outcome, stake, odds)?;
        Ok(Self { outcome, payout })
    }

    /// Payout minus stake. Negative when money was lost.
    #[must_use]
    pub fn profit(&self, stake: Stake) -> Decimal {
        self.payout - stake
    }
}

/// Classify a bet outcome.
///
/// Handicap selections are evaluated on goals scored since `bet_time_score`
/// (kickoff when `None`). Totals selections always use the full match total
/// in `current_score`; `bet_time_score` is ignored for them.
///
/// # Errors
///
/// - [`SettlementError::InvalidArgument`] if a totals line is negative, or
///   if `line` is so large that the margin cannot be represented.
/// - [`SettlementError::UnclassifiableMargin`] if the margin is not a
///   multiple of 0.25, which happens when `line` is not a quarter line.
pub fn classify_outcome(
    kind: SelectionType,
    line: Decimal,
    bet_time_score: Option<ScoreSnapshot>,
    current_score: ScoreSnapshot,
) -> Result<Outcome, SettlementError> {
    let margin = match kind {
        SelectionType::HomeTeam | SelectionType::AwayTeam => {
            let base = bet_time_score.unwrap_or(ScoreSnapshot::KICKOFF);
            let home = i64::from(current_score.home) - i64::from(base.home);
            let away = i64::from(current_score.away) - i64::from(base.away);
            let goal_diff = if kind == SelectionType::HomeTeam {
                home - away
            } else {
                away - home
            };
            Decimal::from(goal_diff)
                .checked_add(line)
                .ok_or_else(|| out_of_range("line", line))?
        }
        SelectionType::Over | SelectionType::Under => {
            if line < Decimal::ZERO {
                return Err(SettlementError::InvalidArgument {
                    field: "line",
                    value: line,
                    reason: "totals line must not be negative",
                });
            }
            let total = Decimal::from(current_score.total());
            let margin = if kind == SelectionType::Over {
                total.checked_sub(line)
            } else {
                line.checked_sub(total)
            };
            margin.ok_or_else(|| out_of_range("line", line))?
        }
    };
    let margin = round2(margin);

    let class = classify_margin(margin)?;
    Ok(Outcome::new(class, margin))
}

/// Map a rounded margin onto the five outcome classes.
///
/// # Errors
///
/// Returns [`SettlementError::UnclassifiableMargin`] for any margin that is
/// not a multiple of 0.25.
pub fn classify_margin(margin: Decimal) -> Result<OutcomeClass, SettlementError> {
    let fraction = margin.fract().abs();
    if ![Decimal::ZERO, QUARTER, HALF, THREE_QUARTERS].contains(&fraction) {
        return Err(SettlementError::UnclassifiableMargin { margin });
    }

    let class = if margin >= HALF {
        OutcomeClass::Win
    } else if margin == QUARTER {
        OutcomeClass::HalfWin
    } else if margin.is_zero() {
        OutcomeClass::Push
    } else if margin == -QUARTER {
        OutcomeClass::HalfLoss
    } else {
        OutcomeClass::Loss
    };

    Ok(class)
}

/// Amount returned for a settled bet, stake included.
///
/// # Errors
///
/// Returns [`SettlementError::InvalidArgument`] if `stake` is not positive,
/// `odds` is below 1, or the payout does not fit in a [`Decimal`].
pub fn compute_payout(
    outcome: OutcomeClass,
    stake: Stake,
    odds: Odds,
) -> Result<Payout, SettlementError> {
    validate_wager(stake, odds)?;

    let payout = match outcome {
        OutcomeClass::Win => stake.checked_mul(odds),
        OutcomeClass::HalfWin => stake
            .checked_mul(odds - Decimal::ONE)
            .and_then(|winnings| winnings.checked_mul(HALF))
            .and_then(|winnings| stake.checked_add(winnings)),
        OutcomeClass::Push => Some(stake),
        OutcomeClass::HalfLoss => stake.checked_mul(HALF),
        OutcomeClass::Loss => Some(Decimal::ZERO),
    }
    .ok_or_else(|| out_of_range("stake", stake))?;

    Ok(payout)
}

/// Classify `context` and compute the payout in one step.
///
/// The wager is validated before the score is looked at, so a bad stake is
/// reported even when the margin is also unclassifiable.
pub fn settle(
    context: &BetContext,
    stake: Stake,
    odds: Odds,
) -> Result<SettlementResult, SettlementError> {
    validate_wager(stake, odds)?;
    let outcome = context.classify()?;
    SettlementResult::new(outcome.class, stake, odds)
}

/// Check that a stake and decimal odds can be settled.
///
/// # Errors
///
/// Returns [`SettlementError::InvalidArgument`] naming `stake` if it is not
/// positive, or `odds` if they are below 1.
pub fn validate_wager(stake: Stake, odds: Odds) -> Result<(), SettlementError> {
    if stake <= Decimal::ZERO {
        return Err(SettlementError::InvalidArgument {
            field: "stake",
            value: stake,
            reason: "must be positive",
        });
    }
    if odds < Decimal::ONE {
        return Err(SettlementError::InvalidArgument {
            field: "odds",
            value: odds,
            reason: "decimal odds must be at least 1",
        });
    }
    Ok(())
}

fn out_of_range(field: &'static str, value: Decimal) -> SettlementError {
    SettlementError::InvalidArgument {
        field,
        value,
        reason: "too large to settle",
    }
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

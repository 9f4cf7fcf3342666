//! Monetary types for stakes, odds and payouts.

use rust_decimal::Decimal;

/// Amount wagered, represented as a Decimal for precision.
pub type Stake = Decimal;

/// Decimal (European) odds: total return per unit staked on a full win.
pub type Odds = Decimal;

/// Amount returned to the bettor at settlement, stake included.
pub type Payout = Decimal;

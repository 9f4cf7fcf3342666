//! Settlement errors for the core engine.
//!
//! The engine never logs or recovers on its own. Every failure is returned
//! to the caller, which decides on logging, retries or fallbacks.
//!
//! # Examples
//!
//! ```
//! use punter::domain::{classify_outcome, ScoreSnapshot, SelectionType, SettlementError};
//! use rust_decimal_macros::dec;
//!
//! // 0.1 is not a quarter line, so the margin cannot be classified.
//! let result = classify_outcome(
//!     SelectionType::Over,
//!     dec!(2.1),
//!     None,
//!     ScoreSnapshot::new(1, 1),
//! );
//!
//! assert!(matches!(result, Err(SettlementError::UnclassifiableMargin { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the settlement core and its input adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettlementError {
    /// Selection text is not one of home, away, over or under.
    #[error("invalid selection '{input}': expected home, away, over or under")]
    InvalidSelection {
        /// The text that failed to parse.
        input: String,
    },

    /// A score string could not be read as two non-negative integers.
    #[error("invalid score '{input}': {reason}")]
    InvalidScore {
        /// The text that failed to parse.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A numeric argument is outside its valid range.
    #[error("invalid {field} {value}: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// The computed margin is not a multiple of 0.25.
    #[error("margin {margin} does not fall on a quarter-goal boundary")]
    UnclassifiableMargin {
        /// The margin after rounding to two decimal places.
        margin: Decimal,
    },
}

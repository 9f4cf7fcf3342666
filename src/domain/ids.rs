//! Identifier types with proper encapsulation.

use std::fmt;

use serde::Serialize;

/// Unique bet identifier.
///
/// The inner u64 is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BetId(u64);

impl BetId {
    /// Create a new `BetId` from a u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bet-{}", self.0)
    }
}

/// Unique character identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CharacterId(u64);

impl CharacterId {
    /// Create a new `CharacterId` from a u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "char-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_id_new_and_value() {
        let id = BetId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn bet_id_display() {
        assert_eq!(format!("{}", BetId::new(7)), "bet-7");
    }

    #[test]
    fn character_id_display() {
        assert_eq!(format!("{}", CharacterId::new(3)), "char-3");
    }

    #[test]
    fn ids_order_by_value() {
        assert!(BetId::new(1) < BetId::new(2));
        assert!(CharacterId::new(9) > CharacterId::new(4));
    }
}

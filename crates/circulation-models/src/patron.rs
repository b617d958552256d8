//! Patron type.

use serde::{Deserialize, Serialize};

/// A registered library patron.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    user_name: String,
    card_number: String,
    #[serde(default)]
    owed_fees: i32,
}

impl Patron {
    /// Creates a patron with no outstanding fees.
    pub fn new(user_name: impl Into<String>, card_number: impl Into<String>) -> Self {
        Self::with_fees(user_name, card_number, 0)
    }

    /// Creates a patron with an initial fee balance.
    pub fn with_fees(
        user_name: impl Into<String>,
        card_number: impl Into<String>,
        owed_fees: i32,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            card_number: card_number.into(),
            owed_fees,
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn owed_fees(&self) -> i32 {
        self.owed_fees
    }

    /// Overwrites the fee balance. Negative balances are accepted.
    pub fn set_owed_fees(&mut self, fees: i32) {
        self.owed_fees = fees;
    }

    /// Returns true if the patron has a positive balance.
    pub fn owes_fees(&self) -> bool {
        self.owed_fees > 0
    }
}

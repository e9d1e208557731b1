use super::chips::Chips;
use super::constants::{
    DEFAULT_FIELD_PAYOUT, DEFAULT_MAXIMUM_BET, DEFAULT_MINIMUM_BET, DEFAULT_ODDS_MULTIPLIER,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("minimum bet must be at least $1 (got {0})")]
    MinimumTooLow(Chips),
    #[error("maximum bet {maximum} must be >= minimum bet {minimum}")]
    MaximumBelowMinimum { minimum: Chips, maximum: Chips },
    #[error("field {number} must pay 2 or 3 to 1 (got {payout})")]
    InvalidFieldPayout { number: u8, payout: u8 },
    #[error("maximum odds multiplier must be > 0")]
    InvalidOddsMultiplier,
}

/// Unvalidated table rules as they appear in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRulesConfig {
    pub minimum_bet: Chips,
    pub maximum_bet: Chips,
    pub maximum_odds_multiplier: u32,
    pub field_2_payout: u8,
    pub field_12_payout: u8,
}

impl Default for TableRulesConfig {
    fn default() -> Self {
        Self {
            minimum_bet: Chips::from_dollars(DEFAULT_MINIMUM_BET),
            maximum_bet: Chips::from_dollars(DEFAULT_MAXIMUM_BET),
            maximum_odds_multiplier: DEFAULT_ODDS_MULTIPLIER,
            field_2_payout: DEFAULT_FIELD_PAYOUT,
            field_12_payout: DEFAULT_FIELD_PAYOUT,
        }
    }
}

/// Validated table rules.
///
/// Limits always satisfy `1 <= minimum_bet <= maximum_bet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableRulesConfig", into = "TableRulesConfig")]
pub struct TableRules {
    minimum_bet: Chips,
    maximum_bet: Chips,
    maximum_odds_multiplier: u32,
    field_2_payout: u8,
    field_12_payout: u8,
}

impl TableRules {
    pub fn new(
        minimum_bet: Chips,
        maximum_bet: Chips,
        maximum_odds_multiplier: u32,
        field_2_payout: u8,
        field_12_payout: u8,
    ) -> Result<Self, RulesError> {
        if minimum_bet < Chips::from_dollars(1) {
            return Err(RulesError::MinimumTooLow(minimum_bet));
        }
        if maximum_bet < minimum_bet {
            return Err(RulesError::MaximumBelowMinimum {
                minimum: minimum_bet,
                maximum: maximum_bet,
            });
        }
        if maximum_odds_multiplier == 0 {
            return Err(RulesError::InvalidOddsMultiplier);
        }
        for (number, payout) in [(2, field_2_payout), (12, field_12_payout)] {
            if !matches!(payout, 2 | 3) {
                return Err(RulesError::InvalidFieldPayout { number, payout });
            }
        }
        Ok(Self {
            minimum_bet,
            maximum_bet,
            maximum_odds_multiplier,
            field_2_payout,
            field_12_payout,
        })
    }

    /// Rules with the given limits and default odds/field payouts.
    pub fn with_limits(minimum_bet: Chips, maximum_bet: Chips) -> Result<Self, RulesError> {
        Self::new(
            minimum_bet,
            maximum_bet,
            DEFAULT_ODDS_MULTIPLIER,
            DEFAULT_FIELD_PAYOUT,
            DEFAULT_FIELD_PAYOUT,
        )
    }

    pub fn minimum_bet(&self) -> Chips {
        self.minimum_bet
    }

    pub fn maximum_bet(&self) -> Chips {
        self.maximum_bet
    }

    pub fn maximum_odds_multiplier(&self) -> u32 {
        self.maximum_odds_multiplier
    }

    pub fn field_2_payout(&self) -> u8 {
        self.field_2_payout
    }

    pub fn field_12_payout(&self) -> u8 {
        self.field_12_payout
    }

    /// Returns true if `amount` is within the table limits.
    pub fn within_limits(&self, amount: Chips) -> bool {
        amount >= self.minimum_bet && amount <= self.maximum_bet
    }
}

impl Default for TableRules {
    fn default() -> Self {
        let config = TableRulesConfig::default();
        Self {
            minimum_bet: config.minimum_bet,
            maximum_bet: config.maximum_bet,
            maximum_odds_multiplier: config.maximum_odds_multiplier,
            field_2_payout: config.field_2_payout,
            field_12_payout: config.field_12_payout,
        }
    }
}

impl TryFrom<TableRulesConfig> for TableRules {
    type Error = RulesError;

    fn try_from(config: TableRulesConfig) -> Result<Self, Self::Error> {
        TableRules::new(
            config.minimum_bet,
            config.maximum_bet,
            config.maximum_odds_multiplier,
            config.field_2_payout,
            config.field_12_payout,
        )
    }
}

impl From<TableRules> for TableRulesConfig {
    fn from(rules: TableRules) -> Self {
        Self {
            minimum_bet: rules.minimum_bet,
            maximum_bet: rules.maximum_bet,
            maximum_odds_multiplier: rules.maximum_odds_multiplier,
            field_2_payout: rules.field_2_payout,
            field_12_payout: rules.field_12_payout,
        }
    }
}

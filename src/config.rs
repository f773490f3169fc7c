// 5.0 config.rs: the two knobs a game host sets. how much imbalance to tolerate,
// and which currency symbol the report prints.

use crate::types::Money;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "£";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettleConfig {
    // Largest |cash-outs - buy-ins| the engine will absorb before refusing
    pub imbalance_threshold: Money,
    // Printed in front of every amount in the report
    pub currency_symbol: String,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            imbalance_threshold: Money::new(dec!(1.00)),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl SettleConfig {
    pub fn with_threshold(imbalance_threshold: Money) -> Self {
        Self {
            imbalance_threshold,
            ..Self::default()
        }
    }

    // Books must balance to the cent
    pub fn strict() -> Self {
        Self::with_threshold(Money::ZERO)
    }

    // Loose home game: a dropped chip or two is fine
    pub fn lenient() -> Self {
        Self::with_threshold(Money::new(dec!(5.00)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.imbalance_threshold.is_negative() {
            return Err(ConfigError::NegativeThreshold(self.imbalance_threshold));
        }

        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::EmptyCurrencySymbol);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Imbalance threshold must be non-negative, got {0}")]
    NegativeThreshold(Money),

    #[error("Currency symbol must not be empty")]
    EmptyCurrencySymbol,
}
